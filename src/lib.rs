//! ocplint
//!
//! Reports Kotlin `when` expressions that dispatch on enum values or on
//! runtime type tests, two common signs of a violated open-closed principle.
//! Works on syntax documents emitted by an external Kotlin front end.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod rules;
pub mod semantic;
pub mod syntax;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::diagnostics::{Debt, Diagnostic, DiagnosticBag, Severity, Span};
    pub use crate::error::LintError;
    pub use crate::rules::{classify, Rule, RuleSet, Verdict};
    pub use crate::semantic::{BindingContext, SemanticType, TypeResolver};
    pub use crate::syntax::SyntaxFile;
}
