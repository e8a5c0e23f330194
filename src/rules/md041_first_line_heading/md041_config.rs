use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MD041Config {
    /// A `title:` key in front matter counts as the document's title
    #[serde(default = "default_front_matter_title")]
    pub front_matter_title: bool,
}

impl Default for MD041Config {
    fn default() -> Self {
        Self {
            front_matter_title: default_front_matter_title(),
        }
    }
}

fn default_front_matter_title() -> bool {
    true
}

impl RuleConfig for MD041Config {
    const RULE_NAME: &'static str = "MD041";
}
