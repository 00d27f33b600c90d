//! Form fields.

use std::sync::Arc;

use indexmap::IndexMap;
use ironhtml::html;

use crate::error::{FormError, Result};
use crate::renderer::{FieldRenderer, Options, RendererTable};
use crate::validation::{RequiredValidator, Validator};
use crate::value::{Choices, FieldType, FieldValue};
use crate::widgets;

/// Metadata key holding instructions shown next to a field.
pub const INSTRUCTIONS: &str = "instructions";

/// A single form input.
///
/// Fields are plain values: cloning a field yields an independent copy
/// that shares only its validators and renderer table.
#[derive(Clone)]
pub struct Field {
    name: String,
    field_type: FieldType,
    kind: Option<String>,
    value: Option<FieldValue>,
    label: Option<String>,
    readonly: bool,
    inherited_readonly: bool,
    required: bool,
    attrs: IndexMap<String, String>,
    metadata: IndexMap<String, String>,
    errors: Vec<String>,
    choices: Option<Choices>,
    validators: Vec<Arc<dyn Validator>>,
    renderers: Option<Arc<RendererTable>>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("readonly", &self.is_readonly())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates a new field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            kind: None,
            value: None,
            label: None,
            readonly: false,
            inherited_readonly: false,
            required: false,
            attrs: IndexMap::new(),
            metadata: IndexMap::new(),
            errors: Vec::new(),
            choices: None,
            validators: Vec::new(),
            renderers: None,
        }
    }

    /// Sets the renderer kind (e.g. `"radio"`), which takes precedence
    /// over the field type when picking a renderer.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the label. An empty label hides it.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the available choices.
    #[must_use]
    pub fn with_choices(mut self, choices: Choices) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Installs a renderer table for this field.
    #[must_use]
    pub fn with_renderers(mut self, renderers: Arc<RendererTable>) -> Self {
        self.renderers = Some(renderers);
        self
    }

    /// Makes the field read-only.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self.validators.push(Arc::new(RequiredValidator::new()));
        self
    }

    /// Sets an extra HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Sets a metadata entry.
    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Sets the instructions metadata entry.
    #[must_use]
    pub fn instructions(self, text: impl Into<String>) -> Self {
        self.meta(INSTRUCTIONS, text)
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Adds a validation error.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Field name, unique within its fieldset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abstract field type.
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Renderer kind, if any.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Current value.
    pub const fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: Option<FieldValue>) {
        self.value = value;
    }

    /// Display label: the explicit label, or the name made readable.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| prettify(&self.name))
    }

    /// Renders the `<label>` element for this field.
    pub fn label_tag(&self) -> String {
        let id = self.name.clone();
        let text = self.label();
        let class = if self.required { "field_req" } else { "field_opt" };
        html! { label.for_(#id).class(#class) { #text } }.render()
    }

    /// Hidden fields are rendered without a label.
    pub fn requires_label(&self) -> bool {
        self.kind.as_deref() != Some("hidden")
    }

    /// Whether the field is read-only, either on its own or through its
    /// fieldset.
    pub const fn is_readonly(&self) -> bool {
        self.readonly || self.inherited_readonly
    }

    pub(crate) fn set_inherited_readonly(&mut self, readonly: bool) {
        self.inherited_readonly = readonly;
    }

    /// Whether a value is required.
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Extra HTML attributes, in insertion order.
    pub const fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    /// Arbitrary metadata, in insertion order.
    pub const fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// Validation errors, in the order they were raised.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Replaces the validation errors.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    /// Available choices, if any.
    pub const fn choices(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }

    pub(crate) fn set_renderers(&mut self, renderers: Arc<RendererTable>) {
        self.renderers = Some(renderers);
    }

    /// The renderer table in effect: the installed one, or the built-in
    /// defaults.
    pub fn renderer_table(&self) -> Arc<RendererTable> {
        self.renderers
            .clone()
            .unwrap_or_else(widgets::default_table)
    }

    /// Builds the renderer for this field from its renderer table.
    pub fn renderer(&self) -> Result<Box<dyn FieldRenderer>> {
        let table = self.renderer_table();
        let factory = table
            .factory_for(self)
            .ok_or_else(|| FormError::NoRenderer {
                field: self.name.clone(),
                key: table.key_for(self).to_string(),
            })?;
        factory(self)
    }

    /// Renders the field for editing.
    pub fn render(&self) -> Result<String> {
        self.renderer()?.render(&Options::new())
    }

    /// Renders the field for display only.
    pub fn render_readonly(&self) -> Result<String> {
        self.renderer()?.render_readonly(&Options::new())
    }

    /// Runs the validators, appending failures to the errors. Returns
    /// whether every validator passed.
    pub fn validate(&mut self) -> bool {
        let value = self.value.as_ref();
        let failures: Vec<String> = self
            .validators
            .iter()
            .filter_map(|v| v.validate(value).err())
            .collect();
        let valid = failures.is_empty();
        self.errors.extend(failures);
        valid
    }
}

/// `first_name` -> `First name`.
fn prettify(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MaxLengthValidator;

    #[test]
    fn test_field_builder() {
        let field = Field::new("first_name", FieldType::String)
            .with_value("Ada")
            .attr("placeholder", "Your name")
            .instructions("As on your passport");

        assert_eq!(field.name(), "first_name");
        assert_eq!(field.value(), Some(&FieldValue::from("Ada")));
        assert_eq!(field.label(), "First name");
        assert_eq!(field.attrs().get("placeholder").map(String::as_str), Some("Your name"));
        assert_eq!(
            field.metadata().get(INSTRUCTIONS).map(String::as_str),
            Some("As on your passport")
        );
        assert!(!field.is_readonly());
        assert!(field.requires_label());
    }

    #[test]
    fn test_explicit_empty_label() {
        let field = Field::new("name", FieldType::String).with_label("");
        assert_eq!(field.label(), "");
    }

    #[test]
    fn test_label_tag() {
        let tag = Field::new("email", FieldType::String).required().label_tag();
        assert!(tag.contains("<label"));
        assert!(tag.contains("email"));
        assert!(tag.contains("Email"));
        assert!(tag.contains("field_req"));
    }

    #[test]
    fn test_hidden_does_not_require_label() {
        let field = Field::new("token", FieldType::String).with_kind("hidden");
        assert!(!field.requires_label());
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut field = Field::new("name", FieldType::String)
            .required()
            .validator(MaxLengthValidator::new(3));
        assert!(!field.validate());
        assert_eq!(field.errors(), ["Please enter a value"]);

        field.set_errors(Vec::new());
        field.set_value(Some("abcdef".into()));
        assert!(!field.validate());
        assert_eq!(field.errors(), ["Value must be at most 3 characters"]);

        field.set_errors(Vec::new());
        field.set_value(Some("abc".into()));
        assert!(field.validate());
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_render_with_default_table() {
        let field = Field::new("name", FieldType::String).with_value("Ada");
        let html = field.render().unwrap();
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"value="Ada""#));
        assert_eq!(field.render_readonly().unwrap(), "Ada");
    }

    #[test]
    fn test_missing_renderer() {
        let field = Field::new("name", FieldType::String)
            .with_renderers(Arc::new(RendererTable::new()));
        assert!(matches!(
            field.render(),
            Err(FormError::NoRenderer { .. })
        ));
    }
}
