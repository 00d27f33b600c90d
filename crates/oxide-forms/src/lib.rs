//! # oxide-forms
//!
//! Form fields, fieldsets and grids with pluggable field renderers.
//!
//! This crate provides:
//! - [`Field`]: a single input with value, label, metadata, attributes and
//!   validation errors
//! - [`FieldSet`]: an ordered, name-keyed set of fields bound to a record
//! - [`Grid`]: a fieldset template applied across many records
//! - [`RendererTable`]: the mapping from field type or renderer kind to a
//!   [`FieldRenderer`], installable per fieldset
//! - Built-in HTML widgets used when no other table is installed
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_forms::fields::{password_field, text_field};
//! use oxide_forms::{FieldSet, Record};
//!
//! let fieldset = FieldSet::new()
//!     .field(text_field("username", "Username", 150, true))
//!     .field(password_field("password", "Password", Some(8)));
//!
//! let mut record = Record::new();
//! record.insert("username".into(), "ada".into());
//! let bound = fieldset.bind(&record);
//!
//! let html = bound.get("username").unwrap().render().unwrap();
//! assert!(html.contains(r#"value="ada""#));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use oxide_forms::fields::text_field;
//! use oxide_forms::FieldSet;
//!
//! let mut fieldset = FieldSet::new().field(text_field("name", "Name", 10, true));
//! assert!(!fieldset.validate());
//! assert_eq!(
//!     fieldset.get("name").unwrap().errors(),
//!     ["Please enter a value"]
//! );
//! ```

mod error;
mod field;
pub mod fields;
mod fieldset;
pub mod renderer;
pub mod validation;
mod value;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors, NON_FIELD_ERRORS};
pub use field::{Field, INSTRUCTIONS};
pub use fieldset::{FieldSet, Focus, Grid};
pub use renderer::{FieldRenderer, Options, RendererFactory, RendererKey, RendererTable};
pub use value::{Choices, FieldType, FieldValue, Record};
