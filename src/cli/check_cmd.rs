//! Handler for the `ocplint check` subcommand.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{info, warn};

use crate::config::Config;
use crate::diagnostics::DiagnosticBag;
use crate::error::LintError;
use crate::rules::RuleSet;
use crate::syntax::SyntaxFile;

use super::walkdir;

/// Totals over one `check` run
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct CheckSummary {
    pub(super) files: usize,
    pub(super) findings: usize,
    pub(super) debt_mins: u32,
}

pub(crate) fn run_check(
    paths: &[PathBuf],
    config: &Config,
    strict: bool,
    json: bool,
) -> Result<ExitCode, LintError> {
    let rules = RuleSet::from_config(config);
    let documents = collect_documents(paths)?;
    if documents.is_empty() {
        warn!("no syntax documents found");
    }

    let summary = check_documents(&documents, &rules, |file, bag| {
        if json {
            for d in bag.diagnostics() {
                println!("{}", d.to_json());
            }
        } else if !bag.is_empty() {
            eprintln!("{}", bag.format_text(&file.text));
        }
    })?;

    info!(
        files = summary.files,
        findings = summary.findings,
        debt_mins = summary.debt_mins,
        "check finished"
    );
    if !json {
        if summary.findings > 0 {
            println!(
                "Checked {} file(s), found {} smell(s), estimated debt {}min",
                summary.files, summary.findings, summary.debt_mins
            );
        } else {
            println!("Checked {} file(s), no smells found", summary.files);
        }
    }

    if strict && summary.findings > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Analyze each document in order, handing every file's findings to `report`
pub(super) fn check_documents(
    documents: &[PathBuf],
    rules: &RuleSet,
    mut report: impl FnMut(&SyntaxFile, &DiagnosticBag),
) -> Result<CheckSummary, LintError> {
    let mut summary = CheckSummary::default();
    for path in documents {
        let file = SyntaxFile::load(path)?;
        let bag = rules.analyze(&file)?;
        report(&file, &bag);

        summary.files += 1;
        summary.findings += bag.len();
        summary.debt_mins += bag.total_debt_mins();
    }
    Ok(summary)
}

/// All `*.json` documents under `paths`, sorted for stable output
pub(super) fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>, LintError> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_file() && is_document(path) {
            documents.push(path.clone());
        } else if path.is_dir() {
            let entries = walkdir(path).map_err(|source| LintError::Io {
                path: path.clone(),
                source,
            })?;
            documents.extend(entries.into_iter().filter(|entry| is_document(entry)));
        } else {
            warn!(path = %path.display(), "skipping input that is not a syntax document");
        }
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
