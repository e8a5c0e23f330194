//!
//! This module defines configuration structures and loading logic for mdtidy.
//! Configuration lives in `.mdtidy.toml` at the traversal root (or a file passed with `--config`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// File name looked up at the traversal root when no explicit config is given
pub const CONFIG_FILE_NAME: &str = ".mdtidy.toml";

/// Path fragments excluded from traversal when the config does not say otherwise
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", "dev/Lib", "site-packages"];

/// Where proposed-mode output is written, relative to the root
pub const DEFAULT_PROPOSED_DIR: &str = ".github/proposed";

/// Represents a rule-specific configuration
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Clone)]
pub struct RuleConfig {
    /// Configuration values for the rule
    #[serde(flatten)]
    pub values: BTreeMap<String, toml::Value>,
}

/// Represents the complete configuration loaded from .mdtidy.toml
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Clone)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Relative path -> language tag, used by `mdtidy propose`
    #[serde(default)]
    pub annotations: IndexMap<String, String>,

    /// Rule-specific configurations
    #[serde(flatten)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Global configuration options
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Path fragments to exclude (substring match on the root-relative path)
    pub exclude: Vec<String>,

    /// Document extensions to process, without the dot
    pub extensions: Vec<String>,

    /// Rules to disable
    pub disable: Vec<String>,

    /// Respect .gitignore files when scanning directories
    pub respect_gitignore: bool,

    /// Output directory for proposed mode, relative to the root
    pub proposed_dir: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            extensions: vec!["md".to_string()],
            disable: Vec::new(),
            respect_gitignore: false,
            proposed_dir: DEFAULT_PROPOSED_DIR.to_string(),
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["global", "annotations"];

impl Config {
    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `<root>/.mdtidy.toml` is used when present,
    /// otherwise the defaults apply.
    pub fn load(config_path: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            log::debug!("[mdtidy-config] Explicit config_path provided: {}", path.display());
            return Self::from_file(path);
        }

        let discovered = root.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            log::debug!("[mdtidy-config] Found {} in {}", CONFIG_FILE_NAME, root.display());
            Self::from_file(&discovered)
        } else {
            log::debug!("[mdtidy-config] No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display_path = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: display_path.clone(),
        })?;
        Self::from_toml_str(&content, &display_path)
    }

    pub fn from_toml_str(content: &str, display_path: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: display_path.to_string(),
            message: e.to_string(),
        })?;

        for key in config.rules.keys() {
            if !is_rule_section_name(key) {
                log::warn!("[WARN] Unknown top-level key in {display_path}: {key}");
            }
        }

        // Rule sections are matched by their uppercase id
        config.rules = std::mem::take(&mut config.rules)
            .into_iter()
            .map(|(name, rule_config)| (name.to_ascii_uppercase(), rule_config))
            .collect();

        Ok(config)
    }

    /// Names of rules disabled in the config, uppercased
    pub fn disabled_rules(&self) -> Vec<String> {
        self.global.disable.iter().map(|name| name.trim().to_ascii_uppercase()).collect()
    }
}

/// Rule sections look like `MD040`; anything else at the top level is a typo
fn is_rule_section_name(key: &str) -> bool {
    if KNOWN_TOP_LEVEL_KEYS.contains(&key) {
        return true;
    }
    key.len() == 5 && key[..2].eq_ignore_ascii_case("md") && key[2..].chars().all(|c| c.is_ascii_digit())
}
