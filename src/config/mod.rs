//! Configuration file for ocplint (ocplint.toml)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::diagnostics::{complexity, design, Severity};
use crate::rules::too_many_functions::DEFAULT_THRESHOLD;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "ocplint.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Per-rule settings, keyed by rule id
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Settings for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub active: bool,

    /// Overrides the rule's default severity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Rule-specific threshold, where the rule has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            active: true,
            severity: None,
            threshold: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Load `explicit` if given, else `ocplint.toml` in `dir` if present,
    /// else the built-in defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using configuration file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a configuration from TOML
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Settings for a rule; rules absent from the file use the defaults
    pub fn rule(&self, id: &str) -> RuleConfig {
        self.rules.get(id).cloned().unwrap_or_default()
    }

    /// Every rule spelled out with its default settings
    pub fn template() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            design::OPEN_CLOSED_PRINCIPLE.to_string(),
            RuleConfig {
                severity: Some(Severity::CodeSmell),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            complexity::TOO_MANY_FUNCTIONS.to_string(),
            RuleConfig {
                severity: Some(Severity::CodeSmell),
                threshold: Some(DEFAULT_THRESHOLD),
                ..RuleConfig::default()
            },
        );
        Self { rules }
    }
}
