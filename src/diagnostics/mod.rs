//! Diagnostic reporting for ocplint
//!
//! This module provides structured reports with stable rule identifiers,
//! source spans, remediation debt, and machine-readable JSON output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub mod rule_ids;
pub use rule_ids::*;

/// A source location span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Source file path
    pub file: PathBuf,

    /// Start byte offset (0-indexed)
    pub start: usize,

    /// End byte offset (0-indexed, exclusive)
    pub end: usize,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// Start column (1-indexed)
    pub start_col: usize,

    /// End line (1-indexed)
    pub end_line: usize,

    /// End column (1-indexed)
    pub end_col: usize,
}

impl Span {
    /// Create a span for an entire file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: path.into(),
            start: 0,
            end: 0,
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 1,
        }
    }
}

/// Severity classification of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    CodeSmell,
    Style,
    Warning,
    Defect,
    Maintainability,
}

impl Severity {
    /// Human-readable label used in text output
    pub fn label(self) -> &'static str {
        match self {
            Severity::CodeSmell => "code smell",
            Severity::Style => "style",
            Severity::Warning => "warning",
            Severity::Defect => "defect",
            Severity::Maintainability => "maintainability",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated remediation cost of a reported smell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub days: u32,
    pub hours: u32,
    pub mins: u32,
}

impl Debt {
    pub const FIVE_MINS: Debt = Debt::new(0, 0, 5);
    pub const TEN_MINS: Debt = Debt::new(0, 0, 10);
    pub const TWENTY_MINS: Debt = Debt::new(0, 0, 20);

    pub const fn new(days: u32, hours: u32, mins: u32) -> Self {
        Self { days, hours, mins }
    }

    /// Total cost in minutes, assuming eight-hour days
    pub fn total_mins(&self) -> u32 {
        self.days * 8 * 60 + self.hours * 60 + self.mins
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.days > 0 {
            parts.push(format!("{}d", self.days));
        }
        if self.hours > 0 {
            parts.push(format!("{}h", self.hours));
        }
        if self.mins > 0 || parts.is_empty() {
            parts.push(format!("{}min", self.mins));
        }
        f.write_str(&parts.join(" "))
    }
}

/// A single report produced by a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable rule identifier (e.g., "OpenClosedPrinciple")
    pub rule: String,

    /// Severity level
    pub severity: Severity,

    /// Primary message
    pub message: String,

    /// Primary source span
    pub span: Span,

    /// Estimated cost to fix
    pub debt: Debt,
}

impl Diagnostic {
    /// Start a diagnostic for the given rule and severity
    pub fn new(rule: impl Into<String>, severity: Severity) -> DiagnosticBuilder {
        DiagnosticBuilder {
            rule: rule.into(),
            severity,
            message: String::new(),
            span: None,
            debt: Debt::TWENTY_MINS,
        }
    }

    /// Format as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as human-readable string
    pub fn to_human_readable(&self, source: &str) -> String {
        let mut output = format!(
            "{}[{}]: {}\n  --> {}:{}:{}\n",
            self.severity,
            self.rule,
            self.message,
            self.span.file.display(),
            self.span.start_line,
            self.span.start_col
        );

        // Show source context
        let lines: Vec<&str> = source.lines().collect();
        if self.span.start_line > 0 && self.span.start_line <= lines.len() {
            let line = lines[self.span.start_line - 1];
            output.push_str(&format!(
                "   |\n{:>3} | {}\n   |",
                self.span.start_line, line
            ));

            let underline_start = self.span.start_col.saturating_sub(1);
            let underline_len = if self.span.end_line == self.span.start_line {
                self.span.end_col.saturating_sub(self.span.start_col).max(1)
            } else {
                line.len().saturating_sub(underline_start).max(1)
            };

            output.push_str(&format!(
                " {}{}\n",
                " ".repeat(underline_start),
                "^".repeat(underline_len)
            ));
        }

        output.push_str(&format!("   = debt: {}\n", self.debt));
        output
    }
}

/// Builder for constructing diagnostics
pub struct DiagnosticBuilder {
    rule: String,
    severity: Severity,
    message: String,
    span: Option<Span>,
    debt: Debt,
}

impl DiagnosticBuilder {
    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the remediation debt
    pub fn debt(mut self, debt: Debt) -> Self {
        self.debt = debt;
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            rule: self.rule,
            severity: self.severity,
            message: self.message,
            span: self.span.unwrap_or_else(|| Span::file("")),
            debt: self.debt,
        }
    }
}

/// The reporting sink: an ordered collection of diagnostics
#[derive(Debug, Default, Clone)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Create a new empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Count diagnostics reported by a given rule
    pub fn count_for_rule(&self, rule: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.rule == rule).count()
    }

    /// Sum of the debt of every diagnostic, in minutes
    pub fn total_debt_mins(&self) -> u32 {
        self.diagnostics.iter().map(|d| d.debt.total_mins()).sum()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Merge another bag into this one
    pub fn merge(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Get the number of diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Format all diagnostics as JSON
    pub fn to_json(&self) -> String {
        let json_array: Vec<String> = self.diagnostics.iter().map(|d| d.to_json()).collect();
        format!("[{}]", json_array.join(","))
    }

    /// Format all diagnostics as human-readable text
    pub fn format_text(&self, source: &str) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.to_human_readable(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests;
