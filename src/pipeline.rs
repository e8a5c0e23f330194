//!
//! The fix pipeline: runs the ordered rule list over one document, creating a
//! fresh context for every rule so each sees the previous rule's output.

use crate::config::Config;
use crate::fix_context::{FixContext, FixOptions};
use crate::rule::Rule;
use crate::rules::all_rules;
use crate::utils::line_ending::{detect_line_ending, normalize_to_lf, restore_line_ending};

/// Result of running the pipeline over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub content: String,
    /// Exactly `content != original`
    pub changed: bool,
    /// Rules whose output differed from their input, in the order they ran
    pub rules_applied: Vec<&'static str>,
}

#[derive(Clone)]
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&Config::default(), &[])
    }
}

impl Pipeline {
    /// Build a pipeline from an explicit rule list, run in the given order
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// All rules in pipeline order, minus those disabled in the config or in `extra_disabled`
    pub fn from_config(config: &Config, extra_disabled: &[String]) -> Self {
        let rules = all_rules(config);

        let mut disabled = config.disabled_rules();
        disabled.extend(extra_disabled.iter().map(|name| name.trim().to_ascii_uppercase()));

        for name in &disabled {
            if !rules.iter().any(|rule| rule.name() == name) {
                log::warn!("[WARN] Unknown rule in disable list: {name}");
            }
        }
        for name in config.rules.keys() {
            if !rules.iter().any(|rule| rule.name() == name) {
                log::warn!("[WARN] Configuration for unknown rule [{name}] is ignored");
            }
        }

        let rules: Vec<Box<dyn Rule>> = rules
            .into_iter()
            .filter(|rule| !disabled.iter().any(|name| name == rule.name()))
            .collect();

        log::debug!(
            "[mdtidy] Pipeline: {}",
            rules.iter().map(|rule| rule.name()).collect::<Vec<_>>().join(", ")
        );

        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Run every rule in order over `content`.
    ///
    /// Line endings are normalized to LF for the rules and the dominant
    /// original ending is written back afterwards.
    pub fn apply(&self, content: &str, options: FixOptions) -> FixOutcome {
        let ending = detect_line_ending(content);
        let mut current = normalize_to_lf(content).into_owned();
        let mut rules_applied = Vec::new();

        for rule in &self.rules {
            let ctx = FixContext::new(&current, options);
            let outcome = rule.apply(&ctx);
            if outcome.changed {
                log::debug!("[mdtidy] {} rewrote the document", rule.name());
                rules_applied.push(rule.name());
                current = outcome.content;
            }
        }

        let content_out = restore_line_ending(current, ending);
        let changed = content_out != content;
        FixOutcome {
            content: content_out,
            changed,
            rules_applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MD012NoMultipleBlanks, MD047SingleTrailingNewline};
    use pretty_assertions::assert_eq;

    fn normalize(content: &str) -> String {
        Pipeline::default().apply(content, FixOptions::default()).content
    }

    #[test]
    fn test_heading_spacing_end_to_end() {
        let outcome = Pipeline::default().apply("# Title\nSome text\n", FixOptions::default());
        assert_eq!(outcome.content, "# Title\n\nSome text\n");
        assert!(outcome.changed);
        assert_eq!(outcome.rules_applied, vec!["MD022"]);
    }

    #[test]
    fn test_clean_document_is_unchanged() {
        let content = "# Title\n\nIntro text.\n\n## Steps\n\n1. one\n1. two\n\n```bash\nls\n```\n";
        let outcome = Pipeline::default().apply(content, FixOptions::default());
        assert_eq!(outcome.content, content);
        assert!(!outcome.changed);
        assert!(outcome.rules_applied.is_empty());
    }

    #[test]
    fn test_ordered_list_only_renumbered() {
        assert_eq!(normalize("1. a\n2. b\n3. c\n"), "1. a\n1. b\n1. c\n");
    }

    #[test]
    fn test_bold_line_with_colon_becomes_clean_heading() {
        assert_eq!(normalize("**Note:**\nRead this.\n"), "# Note\n\nRead this.\n");
    }

    #[test]
    fn test_later_titles_demoted_and_spaced() {
        assert_eq!(normalize("# A\ntext\n# B\n"), "# A\n\ntext\n\n## B\n");
    }

    #[test]
    fn test_indented_code_becomes_tagged_fence() {
        let options = FixOptions::default().with_language("python");
        let outcome = Pipeline::default().apply("# Demo\n\n    print(1)\n", options);
        assert_eq!(outcome.content, "# Demo\n\n```python\nprint(1)\n```\n");
    }

    #[test]
    fn test_title_inserted_when_file_name_known() {
        let options = FixOptions::default().with_file_name("quick_start.md");
        let outcome = Pipeline::default().apply("Welcome.\n", options);
        assert_eq!(outcome.content, "# Quick Start\n\nWelcome.\n");
    }

    #[test]
    fn test_crlf_preserved() {
        let outcome = Pipeline::default().apply("# Title\r\nText\r\n", FixOptions::default());
        assert_eq!(outcome.content, "# Title\r\n\r\nText\r\n");
        assert!(outcome.changed);

        let again = Pipeline::default().apply(&outcome.content, FixOptions::default());
        assert!(!again.changed);
    }

    #[test]
    fn test_blank_document_becomes_empty() {
        let outcome = Pipeline::default().apply("\n\n\n", FixOptions::default());
        assert_eq!(outcome.content, "");
        assert!(outcome.changed);

        let empty = Pipeline::default().apply("", FixOptions::default());
        assert!(!empty.changed);
    }

    #[test]
    fn test_disabled_rules_are_removed() {
        let config = Config::from_toml_str("[global]\ndisable = [\"md047\"]\n", "test").unwrap();
        let pipeline = Pipeline::from_config(&config, &["MD012".to_string()]);
        let names: Vec<&str> = pipeline.rules().iter().map(|rule| rule.name()).collect();
        assert!(!names.contains(&"MD047"));
        assert!(!names.contains(&"MD012"));
        assert_eq!(names.len(), 12);

        let outcome = pipeline.apply("text\n\n\n\nmore", FixOptions::default());
        assert_eq!(outcome.content, "text\n\n\n\nmore");
    }

    #[test]
    fn test_custom_rule_list() {
        let pipeline = Pipeline::new(vec![
            Box::new(MD012NoMultipleBlanks::default()),
            Box::new(MD047SingleTrailingNewline),
        ]);
        let outcome = pipeline.apply("a\n\n\nb", FixOptions::default());
        assert_eq!(outcome.content, "a\n\nb\n");
        assert_eq!(outcome.rules_applied, vec!["MD012", "MD047"]);
    }

    #[test]
    fn test_front_matter_and_fences_untouched() {
        let content = "---\ntitle: x\n\n\n---\n\n# T\n\n```text\n* a\n\n\n\n2. b\n```\n";
        assert_eq!(normalize(content), content);
    }
}
