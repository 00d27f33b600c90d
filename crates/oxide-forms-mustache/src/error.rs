//! Error types for Mustache rendering.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use oxide_forms::FormError;
use thiserror::Error;

/// Errors raised while configuring renderers or rendering templates.
#[derive(Debug, Error)]
pub enum MustacheError {
    /// A renderer resolved no primary template name.
    #[error("no template configured for the renderer of field {field}")]
    TemplateName { field: String },

    /// No directory of the search path holds the template.
    #[error("template not found: {name} (searched {})", display_dirs(.directories))]
    TemplateNotFound {
        name: String,
        directories: Vec<PathBuf>,
    },

    /// Reading a template file failed.
    #[error("failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] mustache::Error),

    /// Rendered output was not valid UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// An error from the form model, e.g. a missing grid row.
    #[error(transparent)]
    Form(#[from] FormError),
}

fn display_dirs(directories: &[PathBuf]) -> String {
    directories
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<MustacheError> for FormError {
    fn from(err: MustacheError) -> Self {
        match err {
            MustacheError::Form(inner) => inner,
            other => Self::Render(Box::new(other)),
        }
    }
}

/// Result type alias for Mustache operations.
pub type Result<T> = std::result::Result<T, MustacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_directories() {
        let err = MustacheError::TemplateNotFound {
            name: "field_text".to_string(),
            directories: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(
            err.to_string(),
            "template not found: field_text (searched /a, /b)"
        );
    }

    #[test]
    fn test_into_form_error() {
        let err: FormError = MustacheError::TemplateName {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, FormError::Render(_)));

        let err: FormError = MustacheError::Form(FormError::MissingRow(3)).into();
        assert!(matches!(err, FormError::MissingRow(3)));
    }
}
