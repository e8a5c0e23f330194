use crate::fix_context::FixContext;
use crate::rule::{Rule, RuleCategory};

/// Rule MD047: Files should end with a single newline character
///
/// Trailing whitespace and blank lines at the end of the document are removed
/// and exactly one newline is written. A document with no visible content
/// becomes empty.
#[derive(Debug, Clone, Default)]
pub struct MD047SingleTrailingNewline;

impl Rule for MD047SingleTrailingNewline {
    fn name(&self) -> &'static str {
        "MD047"
    }

    fn description(&self) -> &'static str {
        "Files should end with a single newline character"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Whitespace
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        ctx.content.is_empty()
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let trimmed = ctx.content.trim_end();
        if trimmed.is_empty() {
            return String::new();
        }

        let mut result = String::with_capacity(trimmed.len() + 1);
        result.push_str(trimmed);
        result.push('\n');
        result
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD047SingleTrailingNewline)
    }
}
