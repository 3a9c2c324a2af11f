//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort analysis of a file or of the whole run
#[derive(Debug, Error)]
pub enum LintError {
    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed syntax document {path:?}")]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The classifier reported a type-check smell without any tested type.
    /// This is a bug in the rule, never a property of the analyzed code.
    #[error("internal defect in {rule}: type-check verdict at byte {offset} carries no type names")]
    MalformedVerdict { rule: &'static str, offset: usize },
}
