use crate::fix_context::{FixContext, is_blank, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rule_config_serde::load_rule_config;

mod md012_config;
pub use md012_config::MD012Config;

/// Rule MD012: No multiple consecutive blank lines
///
/// Runs of whitespace-only lines longer than the maximum collapse to that many
/// empty lines. Blank lines inside code blocks and front matter are kept.
#[derive(Debug, Clone, Default)]
pub struct MD012NoMultipleBlanks {
    config: MD012Config,
}

impl MD012NoMultipleBlanks {
    pub fn new(maximum: usize) -> Self {
        Self {
            config: MD012Config { maximum },
        }
    }

    pub fn from_config_struct(config: MD012Config) -> Self {
        Self { config }
    }
}

impl Rule for MD012NoMultipleBlanks {
    fn name(&self) -> &'static str {
        "MD012"
    }

    fn description(&self) -> &'static str {
        "Multiple consecutive blank lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Whitespace
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.lines.windows(2).any(|pair| is_blank(pair[0]) && is_blank(pair[1]))
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let maximum = self.config.effective_maximum();
        let lines = &ctx.lines;
        let mut result: Vec<&str> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            if !(ctx.is_text(i) && is_blank(lines[i])) {
                result.push(lines[i]);
                i += 1;
                continue;
            }

            let start = i;
            while i < lines.len() && ctx.is_text(i) && is_blank(lines[i]) {
                i += 1;
            }

            if i - start > maximum {
                result.extend(std::iter::repeat_n("", maximum));
            } else {
                result.extend_from_slice(&lines[start..i]);
            }
        }

        join_lines(&result)
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<MD012Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
