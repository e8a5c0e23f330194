/// Rule MD046: Code blocks should be fenced
///
/// Runs of indented (tab or four-space) lines are rewritten as fenced blocks
/// so they can carry a language tag.
use crate::fix_context::{FixContext, is_blank, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rule_config_serde::load_rule_config;
use crate::rules::code_fence_utils::is_usable_language;

mod md046_config;
pub use md046_config::MD046Config;

#[derive(Debug, Clone, Default)]
pub struct MD046CodeBlockStyle {
    config: MD046Config,
}

impl MD046CodeBlockStyle {
    pub fn new(default_language: &str) -> Self {
        Self {
            config: MD046Config {
                default_language: default_language.to_string(),
            },
        }
    }

    pub fn from_config_struct(config: MD046Config) -> Self {
        Self { config }
    }

    fn is_indented(line: &str) -> bool {
        line.starts_with('\t') || line.starts_with("    ")
    }

    /// Remove one level of indentation: a tab or four spaces
    fn dedent_once(line: &str) -> &str {
        line.strip_prefix('\t')
            .or_else(|| line.strip_prefix("    "))
            .unwrap_or(line)
    }

    fn language<'a>(&'a self, ctx: &FixContext<'a>) -> &'a str {
        match ctx.options.language {
            Some(language) if is_usable_language(language) => language,
            _ => self.config.default_language.as_str(),
        }
    }
}

impl Rule for MD046CodeBlockStyle {
    fn name(&self) -> &'static str {
        "MD046"
    }

    fn description(&self) -> &'static str {
        "Code blocks should be fenced"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CodeBlock
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains("\n\t") && !ctx.content.contains("\n    ") && !Self::is_indented(ctx.content)
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let language = self.language(ctx);
        let opener = if is_usable_language(language) {
            format!("```{language}")
        } else {
            "```".to_string()
        };

        let lines = &ctx.lines;
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 4);
        let mut i = 0;

        while i < lines.len() {
            if !(ctx.is_text(i) && Self::is_indented(lines[i])) {
                result.push(lines[i]);
                i += 1;
                continue;
            }

            let start = i;
            while i < lines.len() && ctx.is_text(i) && Self::is_indented(lines[i]) {
                i += 1;
            }
            let run = &lines[start..i];

            // Whitespace-only runs are blank lines, not code
            if run.iter().all(|line| is_blank(line)) {
                result.extend_from_slice(run);
                continue;
            }

            result.push("");
            result.push(&opener);
            result.extend(run.iter().map(|line| Self::dedent_once(line)));
            result.push("```");
            result.push("");
        }

        join_lines(&result)
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<MD046Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
