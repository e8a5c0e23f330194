//! Serde-based configuration for individual rules
//!
//! A rule's section in `.mdtidy.toml` (e.g. `[MD040]`) is deserialized straight into
//! the rule's config struct; missing keys fall back to the struct's defaults.
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for rule configurations
pub trait RuleConfig: Serialize + DeserializeOwned + Default + Clone {
    /// The rule name (e.g., "MD040")
    const RULE_NAME: &'static str;
}

/// Helper to load rule configuration from the global config
pub fn load_rule_config<T: RuleConfig>(config: &crate::config::Config) -> T {
    let Some(rule_config) = config.rules.get(T::RULE_NAME) else {
        return T::default();
    };

    let table: toml::map::Map<String, toml::Value> = rule_config
        .values
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    match T::deserialize(toml::Value::Table(table)) {
        Ok(rule_config) => rule_config,
        Err(e) => {
            log::warn!("[mdtidy-config] Invalid [{}] section, using defaults: {e}", T::RULE_NAME);
            T::default()
        }
    }
}
