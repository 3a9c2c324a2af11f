//! Source file and span utilities

use crate::diagnostics::Span;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Byte range of a node in the file text (end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A source file with its content and line information
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(path: PathBuf, content: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path,
            content,
            line_starts,
        }
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Create a span for a byte range
    pub fn span(&self, range: TextRange) -> Span {
        let (start_line, start_col) = self.line_col(range.start);
        let (end_line, end_col) = self.line_col(range.end);

        Span {
            file: self.path.clone(),
            start: range.start,
            end: range.end,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Convert a byte offset to line and column (1-indexed)
    fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let col = offset - line_start + 1;
        (line + 1, col)
    }
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
