//! Rule trait, registry and the per-file analyzer
//!
//! Each rule walks one [`SyntaxFile`] and pushes its findings into a
//! [`DiagnosticBag`]. Rules hold no per-file state, so one [`RuleSet`] can
//! analyze any number of files, from any number of threads.

pub mod open_closed;
pub mod too_many_functions;

pub use open_closed::{classify, OpenClosedPrinciple, Verdict};
pub use too_many_functions::TooManyFunctions;

use crate::config::Config;
use crate::diagnostics::{Debt, Diagnostic, DiagnosticBag, Severity};
use crate::error::LintError;
use crate::semantic::TypeResolver;
use crate::syntax::{SourceFile, SyntaxFile, TextRange};
use tracing::{debug, warn};

/// A lint rule
pub trait Rule: Send + Sync {
    /// Stable identifier, also the rule's key in the configuration
    fn id(&self) -> &'static str;

    /// Description of what this rule reports
    fn description(&self) -> &'static str;

    fn default_severity(&self) -> Severity {
        Severity::CodeSmell
    }

    /// Estimated time to fix one finding
    fn debt(&self) -> Debt {
        Debt::TWENTY_MINS
    }

    /// Check one file, pushing findings into `sink`
    fn check(&self, ctx: &RuleContext<'_>, sink: &mut DiagnosticBag) -> Result<(), LintError>;
}

/// Everything a rule may read while checking one file
pub struct RuleContext<'a> {
    pub file: &'a SyntaxFile,
    pub source: &'a SourceFile,
    pub resolver: &'a dyn TypeResolver,
    severity: Severity,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        file: &'a SyntaxFile,
        source: &'a SourceFile,
        resolver: &'a dyn TypeResolver,
        severity: Severity,
    ) -> Self {
        Self {
            file,
            source,
            resolver,
            severity,
        }
    }

    /// Package a finding and hand it to the sink
    pub fn emit(
        &self,
        rule: &dyn Rule,
        range: TextRange,
        message: String,
        sink: &mut DiagnosticBag,
    ) {
        sink.push(
            Diagnostic::new(rule.id(), self.severity)
                .message(message)
                .span(self.source.span(range))
                .debt(rule.debt())
                .build(),
        );
    }
}

/// Every rule known to ocplint, parameterized by `config`
pub fn registry(config: &Config) -> Vec<Box<dyn Rule>> {
    let too_many = config.rule(crate::diagnostics::complexity::TOO_MANY_FUNCTIONS);
    vec![
        Box::new(OpenClosedPrinciple),
        Box::new(TooManyFunctions::new(
            too_many
                .threshold
                .unwrap_or(too_many_functions::DEFAULT_THRESHOLD),
        )),
    ]
}

struct ActiveRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

/// The active rules for a run
pub struct RuleSet {
    rules: Vec<ActiveRule>,
}

impl RuleSet {
    /// All rules with their default settings
    pub fn with_defaults() -> Self {
        Self::from_config(&Config::default())
    }

    /// Active rules as selected by `config`
    pub fn from_config(config: &Config) -> Self {
        let known = registry(config);
        for name in config.rules.keys() {
            if !known.iter().any(|rule| rule.id() == name) {
                warn!(rule = %name, "ignoring configuration for unknown rule");
            }
        }

        let rules = known
            .into_iter()
            .filter_map(|rule| {
                let settings = config.rule(rule.id());
                if !settings.active {
                    debug!(rule = rule.id(), "rule deactivated by configuration");
                    return None;
                }
                let severity = settings.severity.unwrap_or_else(|| rule.default_severity());
                Some(ActiveRule { rule, severity })
            })
            .collect();

        Self { rules }
    }

    /// Active rules with their effective severity
    pub fn rules(&self) -> impl Iterator<Item = (&dyn Rule, Severity)> {
        self.rules
            .iter()
            .map(|active| (active.rule.as_ref(), active.severity))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every active rule over one file
    pub fn analyze(&self, file: &SyntaxFile) -> Result<DiagnosticBag, LintError> {
        let source = file.source();
        let bindings = file.binding_context();
        debug!(
            path = %file.path.display(),
            semantic_context = bindings.is_available(),
            resolved = bindings.resolved_count(),
            "analyzing file"
        );

        let mut sink = DiagnosticBag::new();
        for active in &self.rules {
            let ctx = RuleContext::new(file, &source, &bindings, active.severity);
            let mut found = DiagnosticBag::new();
            active.rule.check(&ctx, &mut found)?;
            debug!(
                rule = active.rule.id(),
                findings = found.len(),
                "rule finished"
            );
            sink.merge(found);
        }
        Ok(sink)
    }
}
