//! The built-in template renderers, one per field type or kind.

use oxide_forms::widgets::default_renderers;
use oxide_forms::{FieldType, RendererKey, RendererTable};

use crate::renderer::{RendererConfig, RendererKind};

/// Single-line text input.
pub fn text() -> RendererConfig {
    RendererConfig::new("field_text")
}

/// Number input.
pub fn number() -> RendererConfig {
    RendererConfig::new("field_number")
}

/// A single checkbox, checked when the value is truthy.
pub fn checkbox() -> RendererConfig {
    RendererConfig::new("field_checkbox").kind(RendererKind::CheckBox)
}

/// Password input; the read-only form masks the value.
pub fn password() -> RendererConfig {
    RendererConfig::new("field_password").readonly_template("field_password_readonly")
}

/// Multi-line text area.
pub fn textarea() -> RendererConfig {
    RendererConfig::new("field_textarea")
}

/// Select box; multiple for collection fields.
pub fn select() -> RendererConfig {
    RendererConfig::new("field_select")
        .readonly_template("field_select_readonly")
        .kind(RendererKind::Select)
}

/// One radio button per choice.
pub fn radio_set() -> RendererConfig {
    RendererConfig::new("field_radio_set").kind(RendererKind::WidgetSet)
}

/// One checkbox per choice.
pub fn checkbox_set() -> RendererConfig {
    RendererConfig::new("field_checkbox_set").kind(RendererKind::WidgetSet)
}

/// The catalog as `(key, config)` pairs.
pub fn catalog() -> Vec<(RendererKey, RendererConfig)> {
    vec![
        (FieldType::String.into(), text()),
        (FieldType::Text.into(), text()),
        (FieldType::Unicode.into(), text()),
        (FieldType::Integer.into(), number()),
        (FieldType::Numeric.into(), number()),
        (FieldType::Boolean.into(), checkbox()),
        (FieldType::List.into(), select()),
        (FieldType::Set.into(), select()),
        (RendererKey::kind("password"), password()),
        (RendererKey::kind("textarea"), textarea()),
        (RendererKey::kind("dropdown"), select()),
        (RendererKey::kind("radio"), radio_set()),
        (RendererKey::kind("checkbox"), checkbox_set()),
    ]
}

/// The catalog as a renderer table.
pub fn mustache_renderers() -> RendererTable {
    let mut table = RendererTable::new();
    for (key, config) in catalog() {
        table.insert(key, config.factory());
    }
    table
}

/// The host's built-in renderers overridden by the template renderers.
/// Types and kinds without a template renderer keep the host's.
pub fn get_default_renderers() -> RendererTable {
    let mut table = default_renderers();
    table.extend(mustache_renderers());
    table
}
