//! Boolean fields.

use crate::field::Field;
use crate::value::FieldType;

/// Creates a boolean field (single checkbox).
pub fn boolean_field(name: &str, label: &str) -> Field {
    Field::new(name, FieldType::Boolean).with_label(label)
}
