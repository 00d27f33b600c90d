//! Constructors for commonly used fields.

mod checkbox;
mod hidden;
mod select;
mod text;

pub use checkbox::boolean_field;
pub use hidden::hidden_field;
pub use select::{choice_field, multiple_choice_field, radio_field};
pub use text::{integer_field, password_field, text_field, textarea_field};
