//! Handler for the `ocplint rules` subcommand.

use crate::config::Config;
use crate::rules::registry;

/// One line per known rule: id, state, severity, debt and description
pub(super) fn describe_rules(config: &Config) -> Vec<String> {
    registry(config)
        .iter()
        .map(|rule| {
            let settings = config.rule(rule.id());
            let severity = settings
                .severity
                .unwrap_or_else(|| rule.default_severity());
            format!(
                "{:<22} {:<8} {:<16} {:<6} {}",
                rule.id(),
                if settings.active { "active" } else { "inactive" },
                severity.label(),
                rule.debt().to_string(),
                rule.description()
            )
        })
        .collect()
}

pub(crate) fn run_rules(config: &Config) {
    for line in describe_rules(config) {
        println!("{}", line);
    }
}
