//! Open-closed principle hints for `when` expressions.
//!
//! Only the simplest shapes are recognized:
//!
//! ```kotlin
//! when (color) {          // subject resolves to an enum class
//!     Color.RED -> ...
//!     Color.BLUE -> ...
//! }
//!
//! when {                  // (nearly) every arm is a single type test
//!     a is Square -> ...
//!     b is Circle -> ...
//!     else -> ...
//! }
//! ```
//!
//! Both are a sign that a new value or class requires editing a central
//! dispatch instead of adding an implementation of an abstraction.

use tracing::trace;

use super::{Rule, RuleContext};
use crate::diagnostics::{design, DiagnosticBag};
use crate::error::LintError;
use crate::semantic::TypeResolver;
use crate::syntax::walker::{self, NodeRef};
use crate::syntax::{TextRange, WhenEntry, WhenExpr};

/// Classification of one `when` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The subject is an enum; carries the enum type's display name
    EnumDiscrimination(String),
    /// The arms dispatch on type tests; carries every tested type, in source order
    TypeCheckDiscrimination(Vec<String>),
    None,
}

/// Classify a `when` expression. The enum check takes precedence over the
/// type-check; without semantic context nothing is reported.
pub fn classify(when: &WhenExpr, resolver: &dyn TypeResolver) -> Verdict {
    if !resolver.is_available() {
        return Verdict::None;
    }
    if let Some(name) = enum_subject(when, resolver) {
        return Verdict::EnumDiscrimination(name);
    }
    if is_type_check_dispatch(when) {
        return Verdict::TypeCheckDiscrimination(tested_type_names(when));
    }
    Verdict::None
}

/// Display name of the subject's type, if it resolves to an enum
fn enum_subject(when: &WhenExpr, resolver: &dyn TypeResolver) -> Option<String> {
    let subject = when.subject.as_deref()?;
    resolver
        .type_of(subject)
        .filter(|ty| ty.is_enum())
        .map(|ty| ty.name.clone())
}

/// Number of type tests inside the conditions of one arm
fn condition_type_tests(entry: &WhenEntry) -> usize {
    entry
        .conditions
        .iter()
        .map(|condition| walker::type_tests(NodeRef::Condition(condition)).count())
        .sum()
}

/// True when at least one arm, and all arms but at most one, consist of
/// exactly one type test. Arms with two or more tests do not count.
pub fn is_type_check_dispatch(when: &WhenExpr) -> bool {
    let total = when.entries.len();
    let tally = when
        .entries
        .iter()
        .filter(|entry| condition_type_tests(entry) == 1)
        .count();
    tally > 0 && tally + 1 >= total
}

/// Source text of every tested type across all arms, left to right
fn tested_type_names(when: &WhenExpr) -> Vec<String> {
    when.entries
        .iter()
        .flat_map(|entry| walker::type_tests(NodeRef::Entry(entry)))
        .map(|type_ref| type_ref.text.clone())
        .collect()
}

/// Message for a verdict; `None` when there is nothing to report.
///
/// A type-check verdict without any type name means the tally and the
/// collection disagree, which is reported as [`LintError::MalformedVerdict`].
pub fn compose_message(verdict: &Verdict, at: TextRange) -> Result<Option<String>, LintError> {
    let message = match verdict {
        Verdict::None => return Ok(None),
        Verdict::EnumDiscrimination(name) => format!(
            "Switching on enum values is a common sign of violation of the Open-Closed Principle. \
             Consider introducing an abstraction for `{}`, with one implementation per value.",
            name
        ),
        Verdict::TypeCheckDiscrimination(names) => {
            if names.is_empty() {
                return Err(LintError::MalformedVerdict {
                    rule: design::OPEN_CLOSED_PRINCIPLE,
                    offset: at.start,
                });
            }
            let classes = names
                .iter()
                .map(|name| format!("`{}`", name))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Type checking is a sign of violating the Open-Closed Principle. \
                 Consider introducing an abstraction for {}, with one implementation per class.",
                classes
            )
        }
    };
    Ok(Some(message))
}

/// Reports `when` expressions that switch on enum values or on runtime types
pub struct OpenClosedPrinciple;

impl Rule for OpenClosedPrinciple {
    fn id(&self) -> &'static str {
        design::OPEN_CLOSED_PRINCIPLE
    }

    fn description(&self) -> &'static str {
        "This rule reports use of switching on enums and classes, which may be a sign of \
         violation of the open closed principle."
    }

    fn check(&self, ctx: &RuleContext<'_>, sink: &mut DiagnosticBag) -> Result<(), LintError> {
        for when in walker::when_expressions(&ctx.file.declarations) {
            let verdict = classify(when, ctx.resolver);
            trace!(
                start = when.range.start,
                arms = when.entries.len(),
                ?verdict,
                "classified when expression"
            );
            if let Some(message) = compose_message(&verdict, when.range)? {
                ctx.emit(self, when.range, message, sink);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "open_closed_tests.rs"]
mod tests;
