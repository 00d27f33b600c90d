//! Template-backed field renderers.
//!
//! A [`MustacheFieldRenderer`] is built from a [`RendererConfig`] and a
//! field. It renders the field by passing a context to a named template:
//!
//! | key        | content                                               |
//! |------------|-------------------------------------------------------|
//! | `name`     | the field name                                        |
//! | `value`    | the field value, when set                             |
//! | `label`    | the field label                                       |
//! | `field`    | the field proxy                                       |
//! | `renderer` | `template`, `readonly_template` and `directories`     |
//! | `options`  | every render option, proxied                          |
//! | `attrs`    | the field's HTML attributes as `{key, value}` entries |
//!
//! Render options are also available at the top level, below these keys.
//! Checkbox renderers add `selected`; radio, checkbox-set and select
//! renderers add `choices`. Select renderers also set `multiple` for
//! collection fields.
//!
//! Fieldset and grid templates pass the `focus` option to the focused
//! field; the bundled templates turn it into `autofocus`.

use std::path::PathBuf;
use std::sync::Arc;

use mustache::Data;
use oxide_forms::{Choices, Field, FieldRenderer, FieldValue, Options, RendererFactory};
use tracing::debug;

use crate::context::{ContextMap, TemplateData};
use crate::engine::{self, MustacheEngine};
use crate::error::{MustacheError, Result};
use crate::proxies::{DictProxy, FieldProxy, RenderOptions};

/// Template used for read-only output when none is configured.
pub const DEFAULT_READONLY_TEMPLATE: &str = "field_readonly";

/// Extra context a renderer contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RendererKind {
    /// No extra context.
    #[default]
    Plain,
    /// A single checkbox; adds `selected`.
    CheckBox,
    /// Radio buttons or a checkbox set; adds `choices`.
    WidgetSet,
    /// A select box; adds `choices`.
    Select,
}

/// Configuration of a template-backed renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererConfig {
    pub template: Option<String>,
    pub readonly_template: Option<String>,
    pub directories: Option<Vec<PathBuf>>,
    pub kind: RendererKind,
}

impl RendererConfig {
    /// A plain renderer using `template`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn readonly_template(mut self, template: impl Into<String>) -> Self {
        self.readonly_template = Some(template.into());
        self
    }

    /// Replaces the engine's search path for renderers built from this
    /// configuration.
    #[must_use]
    pub fn directories<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories = Some(directories.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: RendererKind) -> Self {
        self.kind = kind;
        self
    }

    /// A renderer factory for host renderer tables.
    pub fn factory(self) -> RendererFactory {
        let config = Arc::new(self);
        Arc::new(move |field: &Field| -> oxide_forms::Result<Box<dyn FieldRenderer>> {
            let renderer = MustacheFieldRenderer::new(field.clone(), &config)?;
            Ok(Box::new(renderer) as Box<dyn FieldRenderer>)
        })
    }
}

/// One selectable choice of a radio set, checkbox set or select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceProxy {
    /// Name of the field the choice belongs to.
    pub name: String,
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl TemplateData for ChoiceProxy {
    fn to_data(&self) -> Data {
        ContextMap::new()
            .with("name", &self.name)
            .with("value", &self.value)
            .with("label", &self.label)
            .with("selected", self.selected)
            .into_data()
    }
}

/// Renders one field through Mustache templates.
#[derive(Debug, Clone)]
pub struct MustacheFieldRenderer {
    field: Field,
    template: String,
    readonly_template: String,
    directories: Vec<PathBuf>,
    kind: RendererKind,
}

impl MustacheFieldRenderer {
    /// Builds a renderer using the process-wide engine's search path,
    /// unless `config` names its own directories.
    pub fn new(field: Field, config: &RendererConfig) -> Result<Self> {
        let engine = engine::current_or_default();
        Self::with_engine(field, config, &engine)
    }

    /// Builds a renderer falling back to `engine`'s search path.
    ///
    /// The directories are copied; later changes to the engine do not
    /// affect this renderer.
    pub fn with_engine(field: Field, config: &RendererConfig, engine: &MustacheEngine) -> Result<Self> {
        let template = config
            .template
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| MustacheError::TemplateName {
                field: field.name().to_string(),
            })?;
        let readonly_template = config
            .readonly_template
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_READONLY_TEMPLATE.to_string());
        let directories = match &config.directories {
            Some(dirs) if !dirs.is_empty() => dirs.clone(),
            _ => engine.directories().to_vec(),
        };
        debug!(
            field = field.name(),
            template = %template,
            readonly_template = %readonly_template,
            "created mustache renderer"
        );
        Ok(Self {
            field,
            template,
            readonly_template,
            directories,
            kind: config.kind,
        })
    }

    /// The field being rendered.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Template used for editing.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Template used for display only.
    pub fn readonly_template(&self) -> &str {
        &self.readonly_template
    }

    /// The template search path, in lookup order.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Which extra context entries the renderer adds.
    pub fn kind(&self) -> RendererKind {
        self.kind
    }

    /// Whether `choice` is part of the field's current value.
    pub fn selected(&self, choice: &FieldValue) -> bool {
        self.field
            .value()
            .is_some_and(|value| value.contains(choice))
    }

    /// Normalizes choices into proxies. Label-keyed mappings are inverted
    /// into `(value, label)` pairs first.
    pub fn proxy_choices(&self, choices: Choices) -> Vec<ChoiceProxy> {
        choices
            .into_pairs()
            .into_iter()
            .map(|(value, label)| ChoiceProxy {
                name: self.field.name().to_string(),
                selected: self.selected(&value),
                value: value.to_string(),
                label,
            })
            .collect()
    }

    /// Builds the template context for one render call.
    pub fn context(&self, options: &RenderOptions) -> ContextMap {
        let mut context = options.to_context();
        context.insert_data("options", options.to_context().into_data());
        context.insert("name", self.field.name());
        if let Some(value) = self.field.value() {
            context.insert("value", value.to_string());
        }
        context.insert("label", self.field.label());
        context.insert("field", FieldProxy::new(self.field.clone()).without_output());
        context.insert_data("renderer", self.info());
        context.insert("attrs", DictProxy::new(self.field.attrs().clone()));

        match self.kind {
            RendererKind::Plain => {}
            RendererKind::CheckBox => {
                let selected = self.field.value().is_some_and(FieldValue::is_truthy);
                context.insert("selected", selected);
            }
            RendererKind::WidgetSet | RendererKind::Select => {
                let choices = self
                    .field
                    .choices()
                    .cloned()
                    .unwrap_or_else(|| Choices::Pairs(Vec::new()));
                context.insert("choices", self.proxy_choices(choices));
                if self.kind == RendererKind::Select {
                    context.insert("multiple", self.field.field_type().is_collection());
                }
            }
        }
        context
    }

    fn info(&self) -> Data {
        let directories: Vec<String> = self
            .directories
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        ContextMap::new()
            .with("template", &self.template)
            .with("readonly_template", &self.readonly_template)
            .with("directories", directories)
            .into_data()
    }

    /// Renders the field for editing.
    pub fn render(&self, options: &RenderOptions) -> Result<String> {
        self.render_template(&self.template, options)
    }

    /// Renders the field for display only.
    pub fn render_readonly(&self, options: &RenderOptions) -> Result<String> {
        self.render_template(&self.readonly_template, options)
    }

    fn render_template(&self, name: &str, options: &RenderOptions) -> Result<String> {
        let engine = MustacheEngine::new(self.directories.iter().cloned());
        let context = self.context(options).into_data();
        engine.render_template(name, &context)
    }
}

impl FieldRenderer for MustacheFieldRenderer {
    fn render(&self, options: &Options) -> oxide_forms::Result<String> {
        Ok(Self::render(self, &RenderOptions::from(options))?)
    }

    fn render_readonly(&self, options: &Options) -> oxide_forms::Result<String> {
        Ok(Self::render_readonly(self, &RenderOptions::from(options))?)
    }
}
