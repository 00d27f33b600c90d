//! Field renderer trait and renderer tables.
//!
//! A [`RendererTable`] maps a field type or a named renderer kind to a
//! factory that builds a [`FieldRenderer`] bound to one field. Fieldsets
//! carry a table and hand it to their fields; swapping the table swaps how
//! every field of the set is rendered.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::field::Field;
use crate::value::FieldType;

/// Extra values passed to a renderer at render time.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// Renders one field to markup.
pub trait FieldRenderer: Send + Sync {
    /// Renders the field for editing.
    fn render(&self, options: &Options) -> Result<String>;

    /// Renders the field for display only.
    fn render_readonly(&self, options: &Options) -> Result<String>;
}

/// Builds a renderer bound to the given field.
pub type RendererFactory = Arc<dyn Fn(&Field) -> Result<Box<dyn FieldRenderer>> + Send + Sync>;

/// Key of a renderer table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RendererKey {
    /// Abstract field type.
    Type(FieldType),
    /// Named renderer kind, e.g. `"radio"` or `"password"`.
    Kind(String),
}

impl RendererKey {
    /// Shorthand for [`RendererKey::Kind`].
    pub fn kind(name: impl Into<String>) -> Self {
        Self::Kind(name.into())
    }
}

impl From<FieldType> for RendererKey {
    fn from(field_type: FieldType) -> Self {
        Self::Type(field_type)
    }
}

impl From<&str> for RendererKey {
    fn from(kind: &str) -> Self {
        Self::Kind(kind.to_string())
    }
}

impl fmt::Display for RendererKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(t) => write!(f, "type:{t}"),
            Self::Kind(k) => write!(f, "kind:{k}"),
        }
    }
}

/// A mapping from field types and renderer kinds to renderer factories.
#[derive(Clone, Default)]
pub struct RendererTable {
    entries: HashMap<RendererKey, RendererFactory>,
}

impl fmt::Debug for RendererTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.entries.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("RendererTable").field("keys", &keys).finish()
    }
}

impl RendererTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory, replacing any previous entry for the key.
    pub fn insert(&mut self, key: impl Into<RendererKey>, factory: RendererFactory) {
        self.entries.insert(key.into(), factory);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<RendererKey>, factory: RendererFactory) -> Self {
        self.insert(key, factory);
        self
    }

    /// Copies every entry of `other` into this table; `other` wins on
    /// conflicts.
    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Returns the factory registered for a key.
    pub fn get(&self, key: &RendererKey) -> Option<&RendererFactory> {
        self.entries.get(key)
    }

    /// Returns whether the key is registered.
    pub fn contains(&self, key: &RendererKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the key used for a field: its kind when registered,
    /// otherwise its type.
    pub fn key_for(&self, field: &Field) -> RendererKey {
        if let Some(kind) = field.kind() {
            let key = RendererKey::kind(kind);
            if self.contains(&key) {
                return key;
            }
        }
        RendererKey::Type(field.field_type())
    }

    /// Returns the factory for a field, see [`key_for`](Self::key_for).
    pub fn factory_for(&self, field: &Field) -> Option<&RendererFactory> {
        self.get(&self.key_for(field))
    }
}
