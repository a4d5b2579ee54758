//! Error taxonomy for a generator run.
//!
//! Every variant is fatal: the run either produces the complete tree or stops
//! with one of these before anything is written. Nodes that are dropped from
//! the output because they have no usable GET are not errors and never show up
//! here.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// A fatal configuration or input problem.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A file or directory could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A specification document could not be parsed or lacks a required field.
    #[error("invalid specification document {}: {message}", path.display())]
    Document { path: PathBuf, message: String },

    /// A `$ref` inside a document does not point at anything.
    #[error("unresolved reference '{reference}' in {}", path.display())]
    UnresolvedRef { reference: String, path: PathBuf },

    /// A path template cannot be decomposed into segments.
    #[error("invalid path template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A verb outside GET/DELETE/HEAD/OPTIONS/PATCH/POST/PUT.
    #[error("unhandled verb '{verb}' for path '{template}'")]
    UnknownVerb { verb: String, template: String },

    /// The input directory tree does not follow the expected layout.
    #[error("unexpected input layout at {}: {message}", path.display())]
    Layout { path: PathBuf, message: String },

    /// The override file could not be read or parsed.
    #[error("invalid override configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The output template failed to render.
    #[error("failed to render output: {0}")]
    Render(#[from] askama::Error),

    /// The generated body could not be formatted.
    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),

    /// The rendered output could not be written to its writer.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        BuildError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}
