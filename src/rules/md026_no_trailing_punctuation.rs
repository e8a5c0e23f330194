use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rule_config_serde::load_rule_config;
use crate::rules::heading_utils::HeadingUtils;
use std::borrow::Cow;

mod md026_config;
pub use md026_config::MD026Config;

/// Rule MD026: Trailing punctuation in heading
///
/// Removes trailing colons from heading text.
#[derive(Debug, Clone, Default)]
pub struct MD026NoTrailingPunctuation {
    config: MD026Config,
}

impl MD026NoTrailingPunctuation {
    pub fn new(punctuation: &str) -> Self {
        Self {
            config: MD026Config {
                punctuation: punctuation.to_string(),
            },
        }
    }

    pub fn from_config_struct(config: MD026Config) -> Self {
        Self { config }
    }

    fn is_trailing(&self, c: char) -> bool {
        c.is_whitespace() || self.config.punctuation.contains(c)
    }

    fn strip_heading<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let Some(heading) = HeadingUtils::parse_atx_heading(line) else {
            return Cow::Borrowed(line);
        };

        let stripped = heading.text.trim_end_matches(|c: char| self.is_trailing(c));
        if stripped.is_empty() || stripped.len() == heading.text.trim_end().len() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(heading.render(heading.level, stripped))
    }
}

impl Rule for MD026NoTrailingPunctuation {
    fn name(&self) -> &'static str {
        "MD026"
    }

    fn description(&self) -> &'static str {
        "Trailing punctuation in heading"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        self.config.punctuation.is_empty() || !ctx.content.contains('#')
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if ctx.is_text(i) {
                    self.strip_heading(line)
                } else {
                    Cow::Borrowed(*line)
                }
            })
            .collect();

        join_lines(&lines)
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<MD026Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
