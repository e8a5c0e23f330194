use crate::fix_context::{FixContext, LineKind, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rule_config_serde::load_rule_config;
use crate::rules::code_fence_utils::{is_usable_language, parse_fence_opener};
use std::borrow::Cow;

mod md040_config;
pub use md040_config::MD040Config;

/// Rule MD040: Fenced code blocks should have a language specified
///
/// Untagged openers get the annotation language (or the configured default).
/// An opener tagged with the placeholder is retagged only when an annotation
/// supplies a real language; any other tag is left as written.
#[derive(Debug, Clone, Default)]
pub struct MD040FencedCodeLanguage {
    config: MD040Config,
}

impl MD040FencedCodeLanguage {
    pub fn new(default_language: &str) -> Self {
        Self {
            config: MD040Config {
                default_language: default_language.to_string(),
                ..MD040Config::default()
            },
        }
    }

    pub fn from_config_struct(config: MD040Config) -> Self {
        Self { config }
    }

    fn retag<'a>(&self, line: &'a str, annotated: Option<&str>) -> Cow<'a, str> {
        let Some(opener) = parse_fence_opener(line) else {
            return Cow::Borrowed(line);
        };

        let language = annotated.unwrap_or(self.config.default_language.as_str());
        if !is_usable_language(language) {
            return Cow::Borrowed(line);
        }

        let info = opener.info.trim();
        let replace = info.is_empty() || (annotated.is_some() && info == self.config.placeholder && language != info);
        if !replace {
            return Cow::Borrowed(line);
        }

        Cow::Owned(format!("{}{}{}", opener.indent, opener.fence(line), language))
    }
}

impl Rule for MD040FencedCodeLanguage {
    fn name(&self) -> &'static str {
        "MD040"
    }

    fn description(&self) -> &'static str {
        "Code block language should be specified"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CodeBlock
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.has_code_fences()
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let annotated = ctx.options.language.filter(|language| is_usable_language(language));

        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .zip(&ctx.kinds)
            .map(|(line, kind)| match kind {
                LineKind::FenceOpen => self.retag(line, annotated),
                _ => Cow::Borrowed(*line),
            })
            .collect();

        join_lines(&lines)
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<MD040Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
