//! Template-facing views of fields, fieldsets and grids.
//!
//! A proxy exposes what a template needs from a host object and nothing
//! else. Every attribute is `None`-safe: missing data is left out of the
//! template context instead of failing.

use indexmap::IndexMap;
use mustache::Data;
use oxide_forms::{
    Field, FieldRenderer, FieldSet, FieldValue, Focus, Grid, Options, INSTRUCTIONS,
};
use tracing::warn;

use crate::context::{ContextMap, TemplateData};

/// A single error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorProxy {
    pub error: String,
}

impl TemplateData for ErrorProxy {
    fn to_data(&self) -> Data {
        ContextMap::new().with("error", &self.error).into_data()
    }
}

/// Wraps each message in an [`ErrorProxy`]. Absent errors give an empty
/// list.
pub fn proxy_errors(errors: Option<&[String]>) -> Vec<ErrorProxy> {
    errors
        .unwrap_or_default()
        .iter()
        .map(|error| ErrorProxy {
            error: error.clone(),
        })
        .collect()
}

/// A field as seen by a template.
#[derive(Debug, Clone)]
pub struct FieldProxy {
    field: Field,
    focus: bool,
    even: bool,
    output: bool,
}

impl FieldProxy {
    /// Wraps a field. The proxy starts unfocused at an even position.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            focus: false,
            even: true,
            output: true,
        }
    }

    /// Leaves `rendered` and `rendered_readonly` out of the template data.
    /// The proxy handed to a field's own renderer must not render the
    /// field again.
    #[must_use]
    pub fn without_output(mut self) -> Self {
        self.output = false;
        self
    }

    /// Requests focus for the field.
    #[must_use]
    pub fn with_focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    /// Sets whether the field sits at an even position.
    #[must_use]
    pub fn with_parity(mut self, even: bool) -> Self {
        self.even = even;
        self
    }

    /// The wrapped field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The field name, `None` when it is empty.
    pub fn name(&self) -> Option<&str> {
        Some(self.field.name()).filter(|name| !name.is_empty())
    }

    /// The current value, if any.
    pub fn value(&self) -> Option<&FieldValue> {
        self.field.value()
    }

    /// Focus was requested and the field is editable.
    pub fn focus(&self) -> bool {
        self.focus && !self.field.is_readonly()
    }

    /// `"even"` or `"odd"`.
    pub fn parity(&self) -> &'static str {
        if self.even {
            "even"
        } else {
            "odd"
        }
    }

    /// Builds the field's renderer.
    pub fn renderer(&self) -> oxide_forms::Result<Box<dyn FieldRenderer>> {
        self.field.renderer()
    }

    /// Whether the field is shown with a label.
    pub fn requires_label(&self) -> bool {
        self.field.requires_label()
    }

    /// The field's `<label>` element.
    pub fn label_tag(&self) -> String {
        self.field.label_tag()
    }

    /// The display label, `None` when it is empty.
    pub fn label(&self) -> Option<String> {
        Some(self.field.label()).filter(|label| !label.is_empty())
    }

    /// The `instructions` metadata entry, `None` when missing or empty.
    pub fn instructions(&self) -> Option<&str> {
        self.field
            .metadata()
            .get(INSTRUCTIONS)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// The field's metadata, in insertion order.
    pub fn metadata(&self) -> &IndexMap<String, String> {
        self.field.metadata()
    }

    /// The field's errors, in order.
    pub fn errors(&self) -> Vec<ErrorProxy> {
        proxy_errors(Some(self.field.errors()))
    }

    /// Renders the field for editing. A focused field gets the `focus`
    /// render option.
    pub fn render(&self) -> oxide_forms::Result<String> {
        render_field(&self.field, self.focus(), false)
    }

    /// Renders the field for display only.
    pub fn render_readonly(&self) -> oxide_forms::Result<String> {
        render_field(&self.field, false, true)
    }
}

fn render_field(field: &Field, focus: bool, readonly: bool) -> oxide_forms::Result<String> {
    let mut options = Options::new();
    if focus {
        options.insert("focus".to_string(), true.into());
    }
    let renderer = field.renderer()?;
    if readonly {
        renderer.render_readonly(&options)
    } else {
        renderer.render(&options)
    }
}

impl FieldProxy {
    /// Rendered markup for template data. Failures are logged and produce
    /// empty output.
    fn output(&self, readonly: bool) -> String {
        let result = if readonly {
            self.render_readonly()
        } else {
            self.render()
        };
        result.unwrap_or_else(|err| {
            warn!(field = self.field.name(), error = %err, "failed to render field for template");
            String::new()
        })
    }
}

impl TemplateData for FieldProxy {
    fn to_data(&self) -> Data {
        let mut data = ContextMap::new()
            .with_opt("name", self.name())
            .with_opt("value", self.value().map(ToString::to_string))
            .with("focus", self.focus())
            .with("parity", self.parity())
            .with("readonly", self.field.is_readonly())
            .with("requires_label", self.requires_label())
            .with("label_tag", self.label_tag())
            .with_opt("label", self.label())
            .with_opt("instructions", self.instructions())
            .with("has_instructions", self.instructions().is_some())
            .with("metadata", self.metadata())
            .with("errors", self.errors());
        if self.output {
            data.insert("rendered", self.output(false));
            data.insert("rendered_readonly", self.output(true));
        }
        data.into_data()
    }
}

/// Wraps fields in order. Parity alternates starting with even; focus goes
/// to the field selected by `focus`.
pub fn proxy_fields<'a, I>(fields: I, focus: &Focus) -> Vec<FieldProxy>
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = match focus {
                Focus::None => false,
                Focus::First => i == 0,
                Focus::Field(name) => field.name() == name,
            };
            FieldProxy::new(field.clone())
                .with_parity(i % 2 == 0)
                .with_focus(focused)
        })
        .collect()
}

/// A fieldset as seen by a template.
#[derive(Debug, Clone)]
pub struct FieldSetProxy {
    fieldset: FieldSet,
}

impl FieldSetProxy {
    /// Wraps a fieldset.
    pub fn new(fieldset: FieldSet) -> Self {
        Self { fieldset }
    }

    /// Whether the fieldset is read-only.
    pub fn readonly(&self) -> bool {
        self.fieldset.is_readonly()
    }

    /// The rendered fields, in order.
    pub fn fields(&self) -> Vec<FieldProxy> {
        proxy_fields(
            self.fieldset.render_fields().values(),
            self.fieldset.focus_setting(),
        )
    }

    /// Errors not tied to a single field.
    pub fn errors(&self) -> Vec<ErrorProxy> {
        proxy_errors(Some(self.fieldset.errors()))
    }
}

impl TemplateData for FieldSetProxy {
    fn to_data(&self) -> Data {
        ContextMap::new()
            .with("readonly", self.readonly())
            .with("fields", self.fields())
            .with("errors", self.errors())
            .into_data()
    }
}

/// One data row of a grid.
#[derive(Debug, Clone)]
pub struct RowProxy {
    row: usize,
    even: bool,
    errors: Vec<ErrorProxy>,
    fields: Vec<FieldProxy>,
}

impl RowProxy {
    /// Captures the fields and errors of `row`.
    pub fn new(grid: &Grid, row: usize, even: bool) -> oxide_forms::Result<Self> {
        let fields = grid.fields_for_row(row)?;
        Ok(Self {
            row,
            even,
            errors: proxy_errors(grid.errors_for_row(row)),
            fields: proxy_fields(&fields, grid.focus_setting()),
        })
    }

    /// The row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// `"even"` or `"odd"`.
    pub fn parity(&self) -> &'static str {
        if self.even {
            "even"
        } else {
            "odd"
        }
    }

    /// Errors recorded for this row.
    pub fn errors(&self) -> &[ErrorProxy] {
        &self.errors
    }

    /// The row's fields, bound to its record.
    pub fn fields(&self) -> &[FieldProxy] {
        &self.fields
    }
}

impl TemplateData for RowProxy {
    fn to_data(&self) -> Data {
        ContextMap::new()
            .with("row", self.row.to_string())
            .with("parity", self.parity())
            .with("errors", &self.errors)
            .with("fields", &self.fields)
            .into_data()
    }
}

/// A column heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelProxy {
    pub label: String,
}

impl TemplateData for LabelProxy {
    fn to_data(&self) -> Data {
        ContextMap::new().with("label", &self.label).into_data()
    }
}

/// A grid as seen by a template.
#[derive(Debug, Clone)]
pub struct GridProxy {
    grid: Grid,
}

impl GridProxy {
    /// Wraps a grid.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Whether the grid is read-only.
    pub fn readonly(&self) -> bool {
        self.grid.is_readonly()
    }

    /// One heading per rendered field of the template fieldset.
    pub fn labels(&self) -> Vec<LabelProxy> {
        self.grid
            .render_fields()
            .values()
            .map(|field| LabelProxy {
                label: field.label(),
            })
            .collect()
    }

    /// One proxy per bound row. Parity alternates starting with even.
    pub fn rows(&self) -> oxide_forms::Result<Vec<RowProxy>> {
        (0..self.grid.rows().len())
            .map(|row| RowProxy::new(&self.grid, row, row % 2 == 0))
            .collect()
    }
}

impl TemplateData for GridProxy {
    fn to_data(&self) -> Data {
        let rows = self.rows().unwrap_or_else(|err| {
            warn!(error = %err, "failed to proxy grid rows");
            Vec::new()
        });
        ContextMap::new()
            .with("readonly", self.readonly())
            .with("labels", self.labels())
            .with("rows", rows)
            .into_data()
    }
}

/// Presents a mapping as a list of `{key, value}` entries, which templates
/// can iterate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictProxy {
    items: IndexMap<String, String>,
    key_name: String,
    value_name: String,
}

impl DictProxy {
    /// Wraps a map. Entries expose `key` and `value`.
    pub fn new(items: IndexMap<String, String>) -> Self {
        Self {
            items,
            key_name: "key".to_string(),
            value_name: "value".to_string(),
        }
    }

    /// Renames the entry keys.
    #[must_use]
    pub fn with_names(mut self, key_name: impl Into<String>, value_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self.value_name = value_name.into();
        self
    }

    /// Looks up one entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TemplateData for DictProxy {
    fn to_data(&self) -> Data {
        let entries: Vec<Data> = self
            .items
            .iter()
            .map(|(key, value)| {
                ContextMap::new()
                    .with(self.key_name.as_str(), key)
                    .with(self.value_name.as_str(), value)
                    .into_data()
            })
            .collect();
        Data::Vec(entries)
    }
}

/// A value passed to a template by name.
#[derive(Debug, Clone)]
pub enum ContextObject {
    Grid(Grid),
    FieldSet(FieldSet),
    Field(Field),
    Value(serde_json::Value),
}

impl From<Grid> for ContextObject {
    fn from(grid: Grid) -> Self {
        Self::Grid(grid)
    }
}

impl From<FieldSet> for ContextObject {
    fn from(fieldset: FieldSet) -> Self {
        Self::FieldSet(fieldset)
    }
}

impl From<Field> for ContextObject {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<serde_json::Value> for ContextObject {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ContextObject {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for ContextObject {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for ContextObject {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

/// The proxied form of a [`ContextObject`].
#[derive(Debug, Clone)]
pub enum Proxy {
    Grid(GridProxy),
    FieldSet(FieldSetProxy),
    Field(FieldProxy),
    Value(serde_json::Value),
}

/// Wraps grids, fieldsets and fields in their proxies. Grids are checked
/// before fieldsets. Other values pass through unchanged.
pub fn proxy_object(object: ContextObject) -> Proxy {
    match object {
        ContextObject::Grid(grid) => Proxy::Grid(GridProxy::new(grid)),
        ContextObject::FieldSet(fieldset) => Proxy::FieldSet(FieldSetProxy::new(fieldset)),
        ContextObject::Field(field) => Proxy::Field(FieldProxy::new(field)),
        ContextObject::Value(value) => Proxy::Value(value),
    }
}

impl TemplateData for Proxy {
    fn to_data(&self) -> Data {
        match self {
            Self::Grid(proxy) => proxy.to_data(),
            Self::FieldSet(proxy) => proxy.to_data(),
            Self::Field(proxy) => proxy.to_data(),
            Self::Value(value) => value.to_data(),
        }
    }
}

/// Named values handed to a render call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    entries: IndexMap<String, ContextObject>,
}

impl RenderOptions {
    /// An empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ContextObject>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextObject>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up one option.
    pub fn get(&self, key: &str) -> Option<&ContextObject> {
        self.entries.get(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContextObject)> {
        self.entries.iter()
    }

    /// Every option, proxied, keyed by name. `null` values are left out.
    pub fn to_context(&self) -> ContextMap {
        let mut context = ContextMap::new();
        for (key, object) in &self.entries {
            if matches!(object, ContextObject::Value(serde_json::Value::Null)) {
                continue;
            }
            context.insert(key, proxy_object(object.clone()));
        }
        context
    }
}

impl From<&Options> for RenderOptions {
    fn from(options: &Options) -> Self {
        Self {
            entries: options
                .iter()
                .map(|(key, value)| (key.clone(), ContextObject::Value(value.clone())))
                .collect(),
        }
    }
}
