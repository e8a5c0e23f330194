//!
//! Per-document context shared by all rules: the content split into lines and a
//! classification of every line, so rules only ever rewrite ordinary text and
//! never touch code inside fences or YAML front matter.

use crate::rules::code_fence_utils::{FenceMarker, is_fence_closer, parse_fence_opener};
use crate::rules::front_matter_utils::FrontMatterUtils;

/// What a single line of the document is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    FrontMatter,
    FenceOpen,
    FenceBody,
    FenceClose,
    Text,
}

/// Per-file inputs that rules may use besides the content itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOptions<'a> {
    /// Language tag supplied by the annotation table (proposed mode)
    pub language: Option<&'a str>,
    /// File name (or relative path) the content was read from
    pub file_name: Option<&'a str>,
}

impl<'a> FixOptions<'a> {
    pub fn with_language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_file_name(mut self, file_name: &'a str) -> Self {
        self.file_name = Some(file_name);
        self
    }
}

pub struct FixContext<'a> {
    pub content: &'a str,
    /// `content.split('\n')`; joining with `\n` gives back `content` exactly
    pub lines: Vec<&'a str>,
    pub kinds: Vec<LineKind>,
    pub options: FixOptions<'a>,
}

impl<'a> FixContext<'a> {
    pub fn new(content: &'a str, options: FixOptions<'a>) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let kinds = classify_lines(&lines);
        Self {
            content,
            lines,
            kinds,
            options,
        }
    }

    pub fn is_text(&self, index: usize) -> bool {
        self.kinds.get(index) == Some(&LineKind::Text)
    }

    /// Text lines as `(index, line)` pairs
    pub fn text_lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .zip(&self.kinds)
            .enumerate()
            .filter(|(_, (_, kind))| **kind == LineKind::Text)
            .map(|(i, (line, _))| (i, *line))
    }

    pub fn has_code_fences(&self) -> bool {
        self.kinds.contains(&LineKind::FenceOpen)
    }

    /// Index of the last front matter line, if the document has front matter
    pub fn front_matter_end(&self) -> Option<usize> {
        self.kinds.iter().rposition(|kind| *kind == LineKind::FrontMatter)
    }
}

/// Blank means empty or whitespace only
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Join rewritten lines back into a document
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut result = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(line.as_ref());
    }
    result
}

fn classify_lines(lines: &[&str]) -> Vec<LineKind> {
    let mut kinds = vec![LineKind::Text; lines.len()];

    let body_start = match FrontMatterUtils::front_matter_end(lines) {
        Some(end) => {
            kinds[..=end].fill(LineKind::FrontMatter);
            end + 1
        }
        None => 0,
    };

    let mut open_fence: Option<FenceMarker<'_>> = None;
    for (i, line) in lines.iter().enumerate().skip(body_start) {
        match open_fence {
            Some(opener) => {
                if is_fence_closer(line, &opener) {
                    kinds[i] = LineKind::FenceClose;
                    open_fence = None;
                } else {
                    kinds[i] = LineKind::FenceBody;
                }
            }
            None => {
                if let Some(opener) = parse_fence_opener(line) {
                    kinds[i] = LineKind::FenceOpen;
                    open_fence = Some(opener);
                }
            }
        }
    }

    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LineKind::*;

    fn kinds_of(content: &str) -> Vec<LineKind> {
        FixContext::new(content, FixOptions::default()).kinds
    }

    #[test]
    fn test_fenced_block_classification() {
        let kinds = kinds_of("Text\n```rust\nlet x = 1;\n```\nMore");
        assert_eq!(kinds, vec![Text, FenceOpen, FenceBody, FenceClose, Text]);
    }

    #[test]
    fn test_nested_fence_stays_inside_outer_block() {
        let kinds = kinds_of("````markdown\n```python\nprint()\n```\n````\n");
        assert_eq!(kinds, vec![FenceOpen, FenceBody, FenceBody, FenceBody, FenceClose, Text]);
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let kinds = kinds_of("```\ncode\n# not a heading");
        assert_eq!(kinds, vec![FenceOpen, FenceBody, FenceBody]);
    }

    #[test]
    fn test_front_matter_classification() {
        let kinds = kinds_of("---\ntitle: x\n---\n# Title");
        assert_eq!(kinds, vec![FrontMatter, FrontMatter, FrontMatter, Text]);
    }

    #[test]
    fn test_join_lines_round_trips_split() {
        for content in ["", "a", "a\n", "a\n\nb\n\n", "\n"] {
            let ctx = FixContext::new(content, FixOptions::default());
            assert_eq!(join_lines(&ctx.lines), content);
        }
    }

    #[test]
    fn test_text_lines_skip_code() {
        let ctx = FixContext::new("a\n```\nb\n```\nc", FixOptions::default());
        let text: Vec<&str> = ctx.text_lines().map(|(_, line)| line).collect();
        assert_eq!(text, vec!["a", "c"]);
    }
}
