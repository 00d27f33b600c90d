//! Choice fields.

use crate::field::Field;
use crate::value::{Choices, FieldType};

fn with_required(field: Field, required: bool) -> Field {
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a single-choice dropdown.
pub fn choice_field(name: &str, label: &str, choices: Choices, required: bool) -> Field {
    let field = Field::new(name, FieldType::String)
        .with_kind("dropdown")
        .with_label(label)
        .with_choices(choices);
    with_required(field, required)
}

/// Creates a single-choice radio set.
pub fn radio_field(name: &str, label: &str, choices: Choices, required: bool) -> Field {
    let field = Field::new(name, FieldType::String)
        .with_kind("radio")
        .with_label(label)
        .with_choices(choices);
    with_required(field, required)
}

/// Creates a multiple-choice checkbox set.
pub fn multiple_choice_field(name: &str, label: &str, choices: Choices, required: bool) -> Field {
    let field = Field::new(name, FieldType::List)
        .with_kind("checkbox")
        .with_label(label)
        .with_choices(choices);
    with_required(field, required)
}
