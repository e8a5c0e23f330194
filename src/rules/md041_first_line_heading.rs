use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use crate::rule_config_serde::load_rule_config;
use crate::rules::heading_utils::HeadingUtils;

mod md041_config;
pub use md041_config::MD041Config;

/// Rule MD041: Document should have a top-level heading
///
/// Documents without any level-1 heading get one derived from the file name,
/// inserted at the top (after front matter, if present).
#[derive(Debug, Clone, Default)]
pub struct MD041FirstLineHeading {
    config: MD041Config,
}

impl MD041FirstLineHeading {
    pub fn new(front_matter_title: bool) -> Self {
        Self {
            config: MD041Config { front_matter_title },
        }
    }

    pub fn from_config_struct(config: MD041Config) -> Self {
        Self { config }
    }

    fn has_front_matter_title(ctx: &FixContext) -> bool {
        let Some(end) = ctx.front_matter_end() else {
            return false;
        };
        ctx.lines[1..end]
            .iter()
            .any(|line| line.trim_start().starts_with("title:"))
    }
}

impl Rule for MD041FirstLineHeading {
    fn name(&self) -> &'static str {
        "MD041"
    }

    fn description(&self) -> &'static str {
        "First line in file should be a top level heading"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        ctx.options.file_name.is_none() || ctx.content.trim().is_empty()
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let Some(file_name) = ctx.options.file_name else {
            return ctx.content.to_string();
        };

        if ctx.text_lines().any(|(_, line)| HeadingUtils::is_top_level_heading(line)) {
            return ctx.content.to_string();
        }
        if self.config.front_matter_title && Self::has_front_matter_title(ctx) {
            return ctx.content.to_string();
        }

        let title = HeadingUtils::title_from_file_name(file_name);
        if title.is_empty() {
            log::debug!("[mdtidy] No title can be derived from {file_name}");
            return ctx.content.to_string();
        }

        let heading = format!("# {title}");
        let insert_at = ctx.front_matter_end().map_or(0, |end| end + 1);

        let mut lines: Vec<&str> = Vec::with_capacity(ctx.lines.len() + 2);
        lines.extend_from_slice(&ctx.lines[..insert_at]);
        lines.push(&heading);
        lines.push("");
        lines.extend_from_slice(&ctx.lines[insert_at..]);
        join_lines(&lines)
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<MD041Config>(config);
        Box::new(Self::from_config_struct(rule_config))
    }
}
