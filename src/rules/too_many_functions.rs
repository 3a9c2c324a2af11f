//! Reports files that declare more functions than a threshold.

use super::{Rule, RuleContext};
use crate::diagnostics::{complexity, DiagnosticBag};
use crate::error::LintError;
use crate::syntax::{walker, Decl, TextRange};

/// Files with more function declarations than this are reported
pub const DEFAULT_THRESHOLD: usize = 1;

pub struct TooManyFunctions {
    threshold: usize,
}

impl TooManyFunctions {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for TooManyFunctions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Count named functions at any depth. The count is a fold over the
/// traversal, never state kept on the rule.
pub fn count_functions(decls: &[Decl]) -> usize {
    walker::function_declarations(decls).fold(0, |amount, _| amount + 1)
}

impl Rule for TooManyFunctions {
    fn id(&self) -> &'static str {
        complexity::TOO_MANY_FUNCTIONS
    }

    fn description(&self) -> &'static str {
        "This rule reports a file with an excessive function count."
    }

    fn check(&self, ctx: &RuleContext<'_>, sink: &mut DiagnosticBag) -> Result<(), LintError> {
        let amount = count_functions(&ctx.file.declarations);
        if amount > self.threshold {
            let whole = TextRange::new(0, ctx.source.content().len());
            ctx.emit(
                self,
                whole,
                format!(
                    "The file {} has {} function declarations. Threshold is specified with {}.",
                    ctx.file.file_name(),
                    amount,
                    self.threshold
                ),
                sink,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "too_many_functions_tests.rs"]
mod tests;
