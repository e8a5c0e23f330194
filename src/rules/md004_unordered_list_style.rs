use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rules::list_utils::ListUtils;
use std::borrow::Cow;

/// Rule MD004: Unordered list style
///
/// Top-level `*` bullets are rewritten to `-`. Nested items keep their marker.
#[derive(Debug, Clone, Default)]
pub struct MD004UnorderedListStyle;

impl Rule for MD004UnorderedListStyle {
    fn name(&self) -> &'static str {
        "MD004"
    }

    fn description(&self) -> &'static str {
        "Use consistent style for unordered list markers"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains('*')
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if ctx.is_text(i) && ListUtils::is_top_level_asterisk_item(line) {
                    Cow::Owned(format!("-{}", &line[1..]))
                } else {
                    Cow::Borrowed(*line)
                }
            })
            .collect();

        join_lines(&lines)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD004UnorderedListStyle)
    }
}
