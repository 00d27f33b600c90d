//! Field validators.
//!
//! Validators run during [`Field::validate`](crate::Field::validate) and
//! append their message to the field's errors when they fail.

use regex::Regex;

use crate::value::FieldValue;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    ///
    /// `None` means the field has no value at all.
    fn validate(&self, value: Option<&FieldValue>) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

fn text_of(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Please enter a value".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        match value {
            Some(FieldValue::Bool(_) | FieldValue::Integer(_) | FieldValue::Float(_)) => Ok(()),
            Some(FieldValue::List(items)) if !items.is_empty() => Ok(()),
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Value must be at most {max_length} characters"),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        if text_of(value).chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length.
///
/// Empty values pass; combine with [`RequiredValidator`] to reject them.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Value must be at least {min_length} characters"),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        let len = text_of(value).chars().count();
        if len > 0 && len < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        let Some(value) = value else {
            return Ok(());
        };
        if self.pattern.is_match(&value.to_string()) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
