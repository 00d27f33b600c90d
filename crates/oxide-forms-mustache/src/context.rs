//! Conversion of proxies and plain values into template data.
//!
//! Templates only see maps, lists, strings and booleans. The rules:
//!
//! - numbers become strings
//! - `null` and absent optional values are left out of maps, so `{{key}}`
//!   renders nothing and `{{^key}}` fires
//! - booleans stay booleans; use them with section tags
//!   (`{{#focus}}…{{/focus}}`), not as `{{focus}}`
//! - sections open only on booleans, lists and maps; a string can be
//!   printed or tested with an inverted section, never opened

use std::collections::HashMap;

use indexmap::IndexMap;
use mustache::Data;
use oxide_forms::FieldValue;

/// Anything that can be handed to a template.
pub trait TemplateData {
    /// Converts to the engine's data model.
    fn to_data(&self) -> Data;
}

impl TemplateData for str {
    fn to_data(&self) -> Data {
        Data::String(self.to_string())
    }
}

impl TemplateData for String {
    fn to_data(&self) -> Data {
        Data::String(self.clone())
    }
}

impl TemplateData for bool {
    fn to_data(&self) -> Data {
        Data::Bool(*self)
    }
}

impl TemplateData for FieldValue {
    fn to_data(&self) -> Data {
        match self {
            Self::Bool(b) => Data::Bool(*b),
            Self::List(items) => Data::Vec(items.iter().map(TemplateData::to_data).collect()),
            scalar => Data::String(scalar.to_string()),
        }
    }
}

impl TemplateData for serde_json::Value {
    fn to_data(&self) -> Data {
        match self {
            Self::Null => Data::String(String::new()),
            Self::Bool(b) => Data::Bool(*b),
            Self::Number(n) => Data::String(n.to_string()),
            Self::String(s) => Data::String(s.clone()),
            Self::Array(items) => Data::Vec(items.iter().map(TemplateData::to_data).collect()),
            Self::Object(map) => {
                let mut out = ContextMap::new();
                for (key, value) in map {
                    if !value.is_null() {
                        out.insert(key, value);
                    }
                }
                out.into_data()
            }
        }
    }
}

impl<T: TemplateData> TemplateData for [T] {
    fn to_data(&self) -> Data {
        Data::Vec(self.iter().map(TemplateData::to_data).collect())
    }
}

impl<T: TemplateData> TemplateData for Vec<T> {
    fn to_data(&self) -> Data {
        self.as_slice().to_data()
    }
}

impl<T: TemplateData + ?Sized> TemplateData for &T {
    fn to_data(&self) -> Data {
        (**self).to_data()
    }
}

impl TemplateData for IndexMap<String, String> {
    fn to_data(&self) -> Data {
        let mut out = ContextMap::new();
        for (key, value) in self {
            out.insert(key, value);
        }
        out.into_data()
    }
}

/// A string-keyed map of template data.
#[derive(Default)]
pub struct ContextMap {
    entries: HashMap<String, Data>,
}

impl std::fmt::Debug for ContextMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        f.debug_struct("ContextMap").field("keys", &keys).finish()
    }
}

impl ContextMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl TemplateData) {
        self.entries.insert(key.into(), value.to_data());
    }

    /// Sets a key to prebuilt data.
    pub fn insert_data(&mut self, key: impl Into<String>, data: Data) {
        self.entries.insert(key.into(), data);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl TemplateData) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the key only when a value is present.
    #[must_use]
    pub fn with_opt<T: TemplateData>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Builder form of [`insert_data`](Self::insert_data).
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, data: Data) -> Self {
        self.insert_data(key, data);
        self
    }

    /// Returns whether the key is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finishes the map.
    pub fn into_data(self) -> Data {
        Data::Map(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, data: &Data) -> String {
        let mut out = Vec::new();
        mustache::compile_str(template)
            .unwrap()
            .render_data(&mut out, data)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_conversion() {
        let data = json!({
            "title": "Fruit",
            "count": 3,
            "missing": null,
            "items": ["apple", "kiwi"],
            "show": true,
        })
        .to_data();
        let output = render(
            "{{title}}:{{count}}:{{#items}}{{.}},{{/items}}{{#show}}!{{/show}}{{^missing}}-{{/missing}}",
            &data,
        );
        assert_eq!(output, "Fruit:3:apple,kiwi,!-");
    }

    #[test]
    fn test_field_value_conversion() {
        let data = ContextMap::new()
            .with("n", FieldValue::Integer(42))
            .with("list", FieldValue::from(vec!["a", "b"]))
            .into_data();
        assert_eq!(render("{{n}} {{#list}}[{{.}}]{{/list}}", &data), "42 [a][b]");
    }

    #[test]
    fn test_with_opt_skips_none() {
        let map = ContextMap::new()
            .with_opt("label", None::<String>)
            .with_opt("name", Some("text"));
        assert!(!map.contains_key("label"));
        assert!(map.contains_key("name"));
        assert_eq!(render("{{^label}}no label{{/label}}", &map.into_data()), "no label");
    }
}
