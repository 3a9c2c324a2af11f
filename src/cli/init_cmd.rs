//! Handler for the `ocplint init` subcommand.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};
use crate::error::LintError;

/// Write the default configuration into `dir`, returning the file written.
/// An existing file is only replaced with `force`.
pub(crate) fn run_init(dir: &Path, force: bool) -> Result<PathBuf, LintError> {
    let path = dir.join(CONFIG_FILE);
    let content = format!(
        "# ocplint configuration\n# Severities: code-smell, style, warning, defect, maintainability\n\n{}",
        Config::template().to_toml()?
    );

    let io_err = |source| LintError::Io {
        path: path.clone(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(force)
        .truncate(force)
        .create_new(!force)
        .open(&path)
        .map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;

    println!("Wrote {}", path.display());
    Ok(path)
}
