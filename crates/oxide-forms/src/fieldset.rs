//! Fieldsets and grids.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{FormError, Result, ValidationErrors, NON_FIELD_ERRORS};
use crate::field::Field;
use crate::renderer::RendererTable;
use crate::value::Record;

/// Which field of a fieldset should receive input focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    /// No field is focused.
    #[default]
    None,
    /// The first rendered field is focused.
    First,
    /// The named field is focused.
    Field(String),
}

/// An ordered, name-keyed collection of fields.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: IndexMap<String, Field>,
    readonly: bool,
    focus: Focus,
    errors: Vec<String>,
    renderers: Option<Arc<RendererTable>>,
}

impl FieldSet {
    /// Creates an empty fieldset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, replacing any field with the same name.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.insert(field);
        self
    }

    /// Makes the fieldset and all its fields read-only.
    #[must_use]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        for field in self.fields.values_mut() {
            field.set_inherited_readonly(readonly);
        }
        self
    }

    /// Sets which field receives focus.
    #[must_use]
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    /// Installs a renderer table for all fields of the set.
    #[must_use]
    pub fn renderers(mut self, renderers: RendererTable) -> Self {
        let renderers = Arc::new(renderers);
        for field in self.fields.values_mut() {
            field.set_renderers(Arc::clone(&renderers));
        }
        self.renderers = Some(renderers);
        self
    }

    /// Adds a non-field error.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    fn insert(&mut self, mut field: Field) {
        if self.readonly {
            field.set_inherited_readonly(true);
        }
        if let Some(renderers) = &self.renderers {
            field.set_renderers(Arc::clone(renderers));
        }
        self.fields.insert(field.name().to_string(), field);
    }

    /// The fields to render, in definition order.
    pub const fn render_fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Whether the fieldset is read-only.
    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// The focus setting.
    pub const fn focus_setting(&self) -> &Focus {
        &self.focus
    }

    /// Non-field errors, in the order they were raised.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns a copy whose field values are taken from `record`.
    ///
    /// Fields without an entry in the record keep no value.
    #[must_use]
    pub fn bind(&self, record: &Record) -> Self {
        let mut bound = self.clone();
        for (name, field) in &mut bound.fields {
            field.set_value(record.get(name).cloned());
        }
        bound
    }

    /// Distributes keyed errors to the matching fields and the
    /// [`NON_FIELD_ERRORS`] entry to the fieldset.
    pub fn set_errors(&mut self, errors: &ValidationErrors) -> Result<()> {
        for (name, messages) in &errors.errors {
            if name == NON_FIELD_ERRORS {
                self.errors.clone_from(messages);
                continue;
            }
            let field = self
                .fields
                .get_mut(name)
                .ok_or_else(|| FormError::MissingField(name.clone()))?;
            field.set_errors(messages.clone());
        }
        Ok(())
    }

    /// Validates every field. Returns whether all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.fields
            .values_mut()
            .fold(true, |valid, field| field.validate() && valid)
    }

    /// Collects the errors of all fields.
    pub fn validation_errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for message in &self.errors {
            errors.add_non_field(message.clone());
        }
        for field in self.fields.values() {
            for message in field.errors() {
                errors.add(field.name(), message.clone());
            }
        }
        errors
    }
}

/// A fieldset applied across an ordered sequence of rows.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    template: FieldSet,
    rows: Vec<Record>,
    row_errors: HashMap<usize, ValidationErrors>,
}

impl Grid {
    /// Creates a grid from a fieldset template.
    pub fn new(template: FieldSet) -> Self {
        Self {
            template,
            rows: Vec::new(),
            row_errors: HashMap::new(),
        }
    }

    /// Returns a copy bound to the given rows; previous row errors are
    /// dropped.
    #[must_use]
    pub fn bind(&self, rows: Vec<Record>) -> Self {
        Self {
            template: self.template.clone(),
            rows,
            row_errors: HashMap::new(),
        }
    }

    /// The template fields, in column order.
    pub const fn render_fields(&self) -> &IndexMap<String, Field> {
        self.template.render_fields()
    }

    /// The bound rows.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Whether the grid is read-only.
    pub const fn is_readonly(&self) -> bool {
        self.template.is_readonly()
    }

    /// The focus setting of the template.
    pub const fn focus_setting(&self) -> &Focus {
        self.template.focus_setting()
    }

    /// Sets the errors of one row.
    pub fn set_row_errors(&mut self, row: usize, errors: ValidationErrors) -> Result<()> {
        if row >= self.rows.len() {
            return Err(FormError::MissingRow(row));
        }
        self.row_errors.insert(row, errors);
        Ok(())
    }

    /// The errors of one row, keyed like [`ValidationErrors`].
    pub fn row_errors(&self, row: usize) -> Option<&ValidationErrors> {
        self.row_errors.get(&row)
    }

    /// The non-field errors of one row.
    pub fn errors_for_row(&self, row: usize) -> Option<&[String]> {
        self.row_errors
            .get(&row)
            .and_then(ValidationErrors::non_field)
            .map(Vec::as_slice)
    }

    /// The template's fields bound to one row, carrying that row's field
    /// errors. Each call returns fresh copies.
    pub fn fields_for_row(&self, row: usize) -> Result<Vec<Field>> {
        let record = self.rows.get(row).ok_or(FormError::MissingRow(row))?;
        let errors = self.row_errors.get(&row);
        Ok(self
            .template
            .render_fields()
            .values()
            .map(|field| {
                let mut field = field.clone();
                field.set_value(record.get(field.name()).cloned());
                let messages = errors
                    .and_then(|e| e.get(field.name()))
                    .cloned()
                    .unwrap_or_default();
                field.set_errors(messages);
                field
            })
            .collect())
    }

    /// Validates every row, recording failures as row errors. Returns
    /// whether all rows are valid.
    pub fn validate(&mut self) -> Result<bool> {
        let mut valid = true;
        for row in 0..self.rows.len() {
            let mut errors = ValidationErrors::new();
            for mut field in self.fields_for_row(row)? {
                field.set_errors(Vec::new());
                if !field.validate() {
                    for message in field.errors() {
                        errors.add(field.name(), message.clone());
                    }
                }
            }
            if errors.is_empty() {
                self.row_errors.remove(&row);
            } else {
                valid = false;
                self.row_errors.insert(row, errors);
            }
        }
        Ok(valid)
    }
}
