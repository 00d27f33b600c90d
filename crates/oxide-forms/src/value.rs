//! Field values, field types and choice lists.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A data row a fieldset binds to, keyed by field name.
pub type Record = IndexMap<String, FieldValue>;

/// The current value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// A collection of values (multi-select, checkbox sets).
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns whether this value holds a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Truthiness: `false`, zero, empty text and empty lists are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Membership for collections, equality for scalars.
    ///
    /// Values are compared by their textual form, so `Integer(1)` matches
    /// `Text("1")` the way a submitted form value would.
    #[must_use]
    pub fn contains(&self, choice: &Self) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item.matches(choice)),
            scalar => scalar.matches(choice),
        }
    }

    fn matches(&self, other: &Self) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Abstract field type, used to pick a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Text,
    Unicode,
    Integer,
    Numeric,
    Boolean,
    Date,
    List,
    Set,
}

impl FieldType {
    /// Returns whether fields of this type hold collections.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Set)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Unicode => "unicode",
            Self::Integer => "integer",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::List => "list",
            Self::Set => "set",
        };
        f.write_str(name)
    }
}

/// The choices offered by a select, radio set or checkbox set.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices {
    /// Ordered `(value, label)` pairs.
    Pairs(Vec<(FieldValue, String)>),
    /// Label-keyed mapping (`label -> value`).
    ByLabel(IndexMap<String, FieldValue>),
}

impl Choices {
    /// Builds choices from `(value, label)` pairs.
    pub fn pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<FieldValue>,
        L: Into<String>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        )
    }

    /// Builds choices from a `label -> value` mapping.
    pub fn by_label<L, V>(entries: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<FieldValue>,
    {
        Self::ByLabel(
            entries
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        )
    }

    /// Normalizes to `(value, label)` pairs in definition order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(FieldValue, String)> {
        match self {
            Self::Pairs(pairs) => pairs,
            Self::ByLabel(map) => map.into_iter().map(|(l, v)| (v, l)).collect(),
        }
    }

    /// Number of choices.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Pairs(pairs) => pairs.len(),
            Self::ByLabel(map) => map.len(),
        }
    }

    /// Returns whether there are no choices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
