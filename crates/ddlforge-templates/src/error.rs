//! Error types for template rendering and file emission

use ddlforge_parser::DdlError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error(transparent)]
    Ddl(#[from] DdlError),

    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn render(template: impl Into<String>, source: minijinja::Error) -> Self {
        Self::Render {
            template: template.into(),
            source,
        }
    }
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
