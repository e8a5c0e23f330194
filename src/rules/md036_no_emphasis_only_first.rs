use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A line that is nothing but `**text**` (up to three spaces of indent)
static BOLD_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ {0,3}\*\*(.+)\*\*[ \t]*$").unwrap());

/// Same with underscores: `__text__`
static UNDERSCORE_BOLD_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ {0,3}__(.+)__[ \t]*$").unwrap());

/// Inner text containing any of these is more than plain emphasis and is left alone
const MARKUP_CHARS: &[char] = &['`', '[', ']', '*', '_', '#', '<', '>'];

/// Rule MD036: Emphasis used instead of a heading
///
/// A line made up only of strong emphasis is promoted to a level-1 heading.
#[derive(Debug, Clone, Default)]
pub struct MD036NoEmphasisAsHeading;

impl MD036NoEmphasisAsHeading {
    fn emphasized_text(line: &str) -> Option<&str> {
        let caps = BOLD_LINE
            .captures(line)
            .or_else(|| UNDERSCORE_BOLD_LINE.captures(line))?;
        let inner = caps.get(1)?.as_str().trim();

        if inner.is_empty() || inner.contains(MARKUP_CHARS) {
            return None;
        }
        Some(inner)
    }
}

impl Rule for MD036NoEmphasisAsHeading {
    fn name(&self) -> &'static str {
        "MD036"
    }

    fn description(&self) -> &'static str {
        "Emphasis used instead of a heading"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains("**") && !ctx.content.contains("__")
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| match Self::emphasized_text(line) {
                Some(text) if ctx.is_text(i) => Cow::Owned(format!("# {text}")),
                _ => Cow::Borrowed(*line),
            })
            .collect();

        join_lines(&lines)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD036NoEmphasisAsHeading)
    }
}
