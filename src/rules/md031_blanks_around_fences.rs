/// Rule MD031: Fenced code blocks should be surrounded by blank lines
use crate::fix_context::{FixContext, LineKind, is_blank, join_lines};
use crate::rule::{Rule, RuleCategory};

#[derive(Debug, Clone, Default)]
pub struct MD031BlanksAroundFences;

impl Rule for MD031BlanksAroundFences {
    fn name(&self) -> &'static str {
        "MD031"
    }

    fn description(&self) -> &'static str {
        "Fenced code blocks should be surrounded by blank lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::CodeBlock
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.has_code_fences()
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines = &ctx.lines;
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 4);

        for (i, (line, kind)) in lines.iter().zip(&ctx.kinds).enumerate() {
            if *kind == LineKind::FenceOpen && result.last().is_some_and(|prev| !is_blank(prev)) {
                result.push("");
            }

            result.push(*line);

            if *kind == LineKind::FenceClose && lines.get(i + 1).is_some_and(|next| !is_blank(next)) {
                result.push("");
            }
        }

        join_lines(&result)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD031BlanksAroundFences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix_context::FixOptions;

    fn fix(content: &str) -> String {
        MD031BlanksAroundFences.fix(&FixContext::new(content, FixOptions::default()))
    }

    #[test]
    fn test_blanks_added_around_fence() {
        assert_eq!(
            fix("Text\n```rust\nlet x = 1;\n```\nMore\n"),
            "Text\n\n```rust\nlet x = 1;\n```\n\nMore\n"
        );
    }

    #[test]
    fn test_already_spaced_fence_unchanged() {
        let content = "Text\n\n```\ncode\n```\n\nMore\n";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_fence_at_document_edges() {
        let content = "```\ncode\n```";
        assert_eq!(fix(content), content);
    }

    #[test]
    fn test_adjacent_fences_separated_once() {
        assert_eq!(fix("```\na\n```\n~~~\nb\n~~~\n"), "```\na\n```\n\n~~~\nb\n~~~\n");
    }

    #[test]
    fn test_blank_lines_inside_fence_do_not_matter() {
        assert_eq!(fix("x\n```\n\ncode\n\n```\ny"), "x\n\n```\n\ncode\n\n```\n\ny");
    }

    #[test]
    fn test_unterminated_fence_only_gets_leading_blank() {
        assert_eq!(fix("Text\n```\ncode\n"), "Text\n\n```\ncode\n");
    }

    #[test]
    fn test_fix_is_idempotent() {
        let once = fix("a\n```\nb\n```\nc\n```\nd\n```\ne");
        assert_eq!(fix(&once), once);
    }
}
