//! Syntax documents produced by the external Kotlin front end
//!
//! This module provides:
//! - Syntax tree definitions
//! - Pre-order tree walking
//! - Span tracking
//! - Loading of serialized documents (tree + optional type bindings)

pub mod ast;
pub mod span;
pub mod walker;

pub use ast::*;
pub use span::{SourceFile, TextRange};
pub use walker::{NodeRef, Walk};

use crate::error::LintError;
use crate::semantic::{BindingContext, TypeBinding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One analyzed source file: its text, its tree and, when the front end
/// could resolve types, its binding table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxFile {
    /// Path of the original source file
    pub path: PathBuf,

    /// Full text of the original source file
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub declarations: Vec<Decl>,

    /// `None` when no semantic context was available for this file
    #[serde(default)]
    pub bindings: Option<Vec<TypeBinding>>,
}

impl SyntaxFile {
    /// Load a syntax document from disk
    pub fn load(path: &Path) -> Result<Self, LintError> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse a syntax document; `origin` is only used for error reporting
    pub fn parse(json: &str, origin: &Path) -> Result<Self, LintError> {
        serde_json::from_str(json).map_err(|source| LintError::Document {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Line/column mapping for the original source text
    pub fn source(&self) -> SourceFile {
        SourceFile::new(self.path.clone(), self.text.clone())
    }

    /// Semantic context for this file
    pub fn binding_context(&self) -> BindingContext {
        match &self.bindings {
            Some(bindings) => BindingContext::from_bindings(bindings.iter().cloned()),
            None => BindingContext::Empty,
        }
    }

    /// File name component of the source path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
pub(crate) mod fixtures;
