//! Built-in HTML widgets.
//!
//! These renderers produce markup directly and make up the default
//! renderer table used by fields that have no table installed.

mod builtin;

pub use builtin::{Widget, WidgetRenderer};

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;

use crate::field::Field;
use crate::renderer::{FieldRenderer, RendererFactory, RendererKey, RendererTable};
use crate::value::FieldType;

/// Returns a factory building a [`WidgetRenderer`] for the given widget.
pub fn widget(widget: Widget) -> RendererFactory {
    Arc::new(move |field: &Field| {
        Ok(Box::new(WidgetRenderer::new(field.clone(), widget)) as Box<dyn FieldRenderer>)
    })
}

/// The built-in renderer table.
pub fn default_renderers() -> RendererTable {
    let text = Widget::Input("text");
    let number = Widget::Input("number");
    let select = Widget::Select { multiple: true };

    RendererTable::new()
        .with(FieldType::String, widget(text))
        .with(FieldType::Text, widget(text))
        .with(FieldType::Unicode, widget(text))
        .with(FieldType::Integer, widget(number))
        .with(FieldType::Numeric, widget(number))
        .with(FieldType::Boolean, widget(Widget::Checkbox))
        .with(FieldType::Date, widget(Widget::Input("date")))
        .with(FieldType::List, widget(select))
        .with(FieldType::Set, widget(select))
        .with(RendererKey::kind("hidden"), widget(Widget::Hidden))
        .with(RendererKey::kind("password"), widget(Widget::Input("password")))
        .with(RendererKey::kind("textarea"), widget(Widget::Textarea))
        .with(
            RendererKey::kind("dropdown"),
            widget(Widget::Select { multiple: false }),
        )
        .with(RendererKey::kind("radio"), widget(Widget::RadioSet))
        .with(RendererKey::kind("checkbox"), widget(Widget::CheckboxSet))
}

/// Shared copy of [`default_renderers`].
pub fn default_table() -> Arc<RendererTable> {
    static DEFAULTS: OnceLock<Arc<RendererTable>> = OnceLock::new();
    DEFAULTS
        .get_or_init(|| Arc::new(default_renderers()))
        .clone()
}

/// Renders attributes as ` key="value"` pairs, each with a leading space.
pub fn attrs_to_html(attrs: &IndexMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, html_escape(k), html_escape(v)))
        .collect()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attrs_to_html() {
        let mut attrs = IndexMap::new();
        attrs.insert("class".to_string(), "wide".to_string());
        attrs.insert("data-x".to_string(), "1".to_string());
        assert_eq!(attrs_to_html(&attrs), r#" class="wide" data-x="1""#);
    }

    #[test]
    fn test_default_table_covers_every_type() {
        let table = default_renderers();
        for field_type in [
            FieldType::String,
            FieldType::Text,
            FieldType::Unicode,
            FieldType::Integer,
            FieldType::Numeric,
            FieldType::Boolean,
            FieldType::Date,
            FieldType::List,
            FieldType::Set,
        ] {
            let field = Field::new("f", field_type);
            assert!(table.factory_for(&field).is_some(), "{field_type}");
        }
    }
}
