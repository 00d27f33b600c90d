//! Hidden field type.

use crate::field::Field;
use crate::value::FieldType;

/// Creates a hidden field.
pub fn hidden_field(name: &str, initial: Option<&str>) -> Field {
    let field = Field::new(name, FieldType::String)
        .with_kind("hidden")
        .with_label("");

    match initial {
        Some(value) => field.with_value(value),
        None => field,
    }
}
