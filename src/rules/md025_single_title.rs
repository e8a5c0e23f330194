/// Rule MD025: Multiple top-level headings in the same document
///
/// The first level-1 heading is the title; every later one is demoted to level 2.
use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rules::heading_utils::HeadingUtils;
use std::borrow::Cow;

#[derive(Debug, Clone, Default)]
pub struct MD025SingleTitle;

impl Rule for MD025SingleTitle {
    fn name(&self) -> &'static str {
        "MD025"
    }

    fn description(&self) -> &'static str {
        "Multiple top-level headings in the same document"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains('#')
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let mut seen_title = false;
        let mut lines: Vec<Cow<str>> = ctx.lines.iter().map(|line| Cow::Borrowed(*line)).collect();

        for (i, line) in ctx.text_lines() {
            let Some(heading) = HeadingUtils::parse_atx_heading(line) else {
                continue;
            };
            if heading.level != 1 {
                continue;
            }
            if seen_title {
                lines[i] = Cow::Owned(heading.render(2, heading.text));
            }
            seen_title = true;
        }

        join_lines(&lines)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD025SingleTitle)
    }
}
