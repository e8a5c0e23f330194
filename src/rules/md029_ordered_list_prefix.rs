use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rules::list_utils::ORDERED_ITEM;
use std::borrow::Cow;

/// Rule MD029: Ordered list item prefix
///
/// Every ordered item is numbered `1.` so lists stay valid when items are
/// added, removed or reordered. Renderers number them sequentially.
#[derive(Debug, Clone, Default)]
pub struct MD029OrderedListPrefix;

impl MD029OrderedListPrefix {
    fn renumber(line: &str) -> Cow<'_, str> {
        let Some(caps) = ORDERED_ITEM.captures(line) else {
            return Cow::Borrowed(line);
        };
        if &caps[2] == "1" {
            return Cow::Borrowed(line);
        }

        let prefix_len = caps.get(0).map_or(0, |m| m.end());
        Cow::Owned(format!("{}1.{}{}", &caps[1], &caps[3], &line[prefix_len..]))
    }
}

impl Rule for MD029OrderedListPrefix {
    fn name(&self) -> &'static str {
        "MD029"
    }

    fn description(&self) -> &'static str {
        "Ordered list item prefix"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains('.')
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if ctx.is_text(i) {
                    Self::renumber(line)
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
        Box::new(MD029OrderedListPrefix)
    }
}
