use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MD046Config {
    /// Language written on the fence of a converted block when the file has no annotation
    #[serde(default = "default_language", alias = "default_language")]
    pub default_language: String,
}

impl Default for MD046Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "text".to_string()
}

impl RuleConfig for MD046Config {
    const RULE_NAME: &'static str = "MD046";
}
