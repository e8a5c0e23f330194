use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

/// Configuration for MD040 (Fenced code language)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MD040Config {
    /// Tag given to untagged fences when the file has no annotation
    #[serde(default = "default_language", alias = "default_language")]
    pub default_language: String,

    /// Tag that counts as "no real language" and may be replaced by an annotation
    #[serde(default = "default_language")]
    pub placeholder: String,
}

impl Default for MD040Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            placeholder: default_language(),
        }
    }
}

fn default_language() -> String {
    "text".to_string()
}

impl RuleConfig for MD040Config {
    const RULE_NAME: &'static str = "MD040";
}
