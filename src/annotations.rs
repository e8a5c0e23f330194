//!
//! The annotation table: root-relative document paths mapped to the language
//! tag their code blocks should carry. Drives proposed mode, where each entry
//! is processed in declaration order.

use indexmap::IndexMap;
use std::path::Path;

use crate::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationTable {
    entries: IndexMap<String, String>,
}

impl AnnotationTable {
    /// Load a standalone annotation file: a flat TOML table of `"path" = "language"`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display_path = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: display_path.clone(),
        })?;
        Self::from_toml_str(&content, &display_path)
    }

    pub fn from_toml_str(content: &str, display_path: &str) -> Result<Self, ConfigError> {
        let entries: IndexMap<String, String> = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: display_path.to_string(),
            message: e.to_string(),
        })?;
        log::debug!("[mdtidy-config] Loaded {} annotations from {display_path}", entries.len());
        Ok(Self::from(entries))
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(path, language)| (path.as_str(), language.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, String>> for AnnotationTable {
    fn from(raw: IndexMap<String, String>) -> Self {
        let mut entries = IndexMap::with_capacity(raw.len());
        for (path, language) in raw {
            let key = normalize_key(&path);
            let language = language.trim().to_string();
            if let Some(previous) = entries.insert(key.clone(), language) {
                log::warn!("[WARN] Duplicate annotation for {key}, replacing \"{previous}\"");
            }
        }
        Self { entries }
    }
}

/// Paths are matched exactly in `/`-separated root-relative form
fn normalize_key(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    let mut key = path.as_str();
    while let Some(rest) = key.strip_prefix("./") {
        key = rest;
    }
    key.to_string()
}
