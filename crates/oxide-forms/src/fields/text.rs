//! Text and number fields.

use crate::field::Field;
use crate::validation::{MaxLengthValidator, MinLengthValidator};
use crate::value::FieldType;

/// Creates a single-line text field with a maximum length.
pub fn text_field(name: &str, label: &str, max_length: usize, required: bool) -> Field {
    let field = Field::new(name, FieldType::String)
        .with_label(label)
        .validator(MaxLengthValidator::new(max_length));

    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a multi-line text field.
pub fn textarea_field(name: &str, label: &str, required: bool) -> Field {
    let field = Field::new(name, FieldType::Text)
        .with_kind("textarea")
        .with_label(label);

    if required {
        field.required()
    } else {
        field
    }
}

/// Creates an integer field.
pub fn integer_field(name: &str, label: &str, required: bool) -> Field {
    let field = Field::new(name, FieldType::Integer).with_label(label);

    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a password field. Passwords are always required.
pub fn password_field(name: &str, label: &str, min_length: Option<usize>) -> Field {
    let mut field = Field::new(name, FieldType::String)
        .with_kind("password")
        .with_label(label)
        .required();

    if let Some(min) = min_length {
        field = field.validator(MinLengthValidator::new(min));
    }

    field
}
