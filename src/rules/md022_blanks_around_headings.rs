use crate::fix_context::{FixContext, is_blank, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rules::heading_utils::HeadingUtils;

/// Rule MD022: Headings should be surrounded by blank lines
///
/// A heading on the first line needs no blank above it, and one on the last
/// line needs none below.
#[derive(Debug, Clone, Default)]
pub struct MD022BlanksAroundHeadings;

impl Rule for MD022BlanksAroundHeadings {
    fn name(&self) -> &'static str {
        "MD022"
    }

    fn description(&self) -> &'static str {
        "Headings should be surrounded by blank lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains('#')
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines = &ctx.lines;
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 8);

        for (i, line) in lines.iter().enumerate() {
            let is_heading = ctx.is_text(i) && HeadingUtils::is_heading(line);

            if is_heading && result.last().is_some_and(|prev| !is_blank(prev)) {
                result.push("");
            }

            result.push(*line);

            if is_heading && lines.get(i + 1).is_some_and(|next| !is_blank(next)) {
                result.push("");
            }
        }

        join_lines(&result)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD022BlanksAroundHeadings)
    }
}
