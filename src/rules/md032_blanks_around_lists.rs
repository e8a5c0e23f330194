use crate::fix_context::{FixContext, is_blank, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rules::list_utils::ListUtils;

/// Rule MD032: Lists should be surrounded by blank lines
///
/// A list run starts at a top-level item and continues through further items
/// and indented lines. A blank line goes between a run and prose directly
/// above or below it.
#[derive(Debug, Clone, Default)]
pub struct MD032BlanksAroundLists;

impl MD032BlanksAroundLists {
    /// Prose: a non-blank line at column 0 that is not a list item
    fn is_prose(line: &str) -> bool {
        !is_blank(line) && !line.starts_with(char::is_whitespace) && !ListUtils::is_top_level_list_item(line)
    }
}

impl Rule for MD032BlanksAroundLists {
    fn name(&self) -> &'static str {
        "MD032"
    }

    fn description(&self) -> &'static str {
        "Lists should be surrounded by blank lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines = &ctx.lines;
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 8);
        let mut in_list = false;

        for (i, line) in lines.iter().enumerate() {
            if !ctx.is_text(i) || is_blank(line) {
                in_list = false;
            } else if ListUtils::is_top_level_list_item(line) {
                let after_prose = i > 0 && ctx.is_text(i - 1) && Self::is_prose(lines[i - 1]);
                if !in_list && after_prose {
                    result.push("");
                }
                in_list = true;
            } else if !line.starts_with(char::is_whitespace) {
                if in_list {
                    result.push("");
                }
                in_list = false;
            }

            result.push(*line);
        }

        join_lines(&result)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD032BlanksAroundLists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix_context::FixOptions;

    fn fix(content: &str) -> String {
        MD032BlanksAroundLists.fix(&FixContext::new(content, FixOptions::default()))
    }

    #[test]
    fn test_blank_before_list() {
        assert_eq!(fix("Items:\n- a\n- b\n"), "Items:\n\n- a\n- b\n");
    }

    #[test]
    fn test_blank_after_list() {
        assert_eq!(fix("- a\n- b\nAfter\n"), "- a\n- b\n\nAfter\n");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(fix("Steps\n1. a\n2. b\nDone"), "Steps\n\n1. a\n2. b\n\nDone");
    }

    #[test]
    fn test_continuation_and_nested_items_stay_in_list() {
        let content = "- a\n  continued\n  - nested\n- b\n";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_indented_text_after_prose_is_not_a_list() {
        let content = "Para\n  indented\n";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_well_spaced_list_unchanged() {
        let content = "Intro\n\n- a\n- b\n\nOutro\n";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_list_next_to_fence_is_left_to_fence_rule() {
        let content = "- a\n```\ncode\n```\n- b\n";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_thematic_break_is_not_an_item() {
        assert_eq!(fix("- a\n---\n"), "- a\n\n---\n");
    }

    #[test]
    fn test_fix_is_idempotent() {
        let once = fix("Intro\n* a\nmiddle\n1. b\n  more\nend");
        assert_eq!(once, "Intro\n\n* a\n\nmiddle\n\n1. b\n  more\n\nend");
        assert_eq!(fix(&once), once);
    }
}
