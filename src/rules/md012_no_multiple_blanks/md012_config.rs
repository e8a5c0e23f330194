use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MD012Config {
    /// Longest run of blank lines that is kept as written. Values below 1 act as 1.
    #[serde(default = "default_maximum")]
    pub maximum: usize,
}

impl MD012Config {
    pub fn effective_maximum(&self) -> usize {
        self.maximum.max(1)
    }
}

impl Default for MD012Config {
    fn default() -> Self {
        Self { maximum: default_maximum() }
    }
}

fn default_maximum() -> usize {
    1
}

impl RuleConfig for MD012Config {
    const RULE_NAME: &'static str = "MD012";
}
