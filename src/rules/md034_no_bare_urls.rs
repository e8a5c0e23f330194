/// Rule MD034: No bare URLs
///
/// Wraps `http://` and `https://` URLs that stand on their own (at the start of a
/// line or after whitespace) in angle brackets, making them autolinks.
use crate::fix_context::{FixContext, join_lines};
use crate::rule::{Rule, RuleCategory};
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

/// Punctuation that ends a sentence rather than the URL
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', '*', '_'];

#[derive(Debug, Clone, Default)]
pub struct MD034NoBareUrls;

impl MD034NoBareUrls {
    /// Byte ranges of inline code spans (matching backtick runs) in a line
    fn code_span_ranges(line: &str) -> Vec<Range<usize>> {
        let bytes = line.as_bytes();
        let mut ranges = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'`' {
                i += 1;
                continue;
            }

            let open_start = i;
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
            let run_len = i - open_start;

            let mut j = i;
            while j < bytes.len() {
                if bytes[j] != b'`' {
                    j += 1;
                    continue;
                }
                let close_start = j;
                while j < bytes.len() && bytes[j] == b'`' {
                    j += 1;
                }
                if j - close_start == run_len {
                    ranges.push(open_start..j);
                    i = j;
                    break;
                }
            }
        }

        ranges
    }

    /// End of the URL whose scheme ends at `from`. Stops at whitespace, angle
    /// brackets, backticks and unbalanced closing parens/brackets, then gives
    /// back trailing sentence punctuation.
    fn url_end(line: &str, from: usize) -> usize {
        let mut parens = 0usize;
        let mut brackets = 0usize;
        let mut end = from;

        for (offset, c) in line[from..].char_indices() {
            match c {
                c if c.is_whitespace() => break,
                '<' | '>' | '`' => break,
                '(' => parens += 1,
                ')' if parens == 0 => break,
                ')' => parens -= 1,
                '[' => brackets += 1,
                ']' if brackets == 0 => break,
                ']' => brackets -= 1,
                _ => {}
            }
            end = from + offset + c.len_utf8();
        }

        while end > from && line[..end].ends_with(TRAILING_PUNCTUATION) {
            end -= 1;
        }
        end
    }

    fn wrap_bare_urls(line: &str) -> Cow<'_, str> {
        if !line.contains("://") {
            return Cow::Borrowed(line);
        }

        let code_spans = Self::code_span_ranges(line);
        let mut result = String::with_capacity(line.len() + 4);
        let mut copied_up_to = 0;

        for m in URL_SCHEME.find_iter(line) {
            let start = m.start();
            if start < copied_up_to || code_spans.iter().any(|span| span.contains(&start)) {
                continue;
            }
            let standalone = line[..start].chars().next_back().is_none_or(char::is_whitespace);
            if !standalone {
                continue;
            }

            let end = Self::url_end(line, m.end());
            if end == m.end() {
                continue;
            }

            result.push_str(&line[copied_up_to..start]);
            result.push('<');
            result.push_str(&line[start..end]);
            result.push('>');
            copied_up_to = end;
        }

        if copied_up_to == 0 {
            return Cow::Borrowed(line);
        }
        result.push_str(&line[copied_up_to..]);
        Cow::Owned(result)
    }
}

impl Rule for MD034NoBareUrls {
    fn name(&self) -> &'static str {
        "MD034"
    }

    fn description(&self) -> &'static str {
        "URL without angle brackets or link formatting"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Link
    }

    fn should_skip(&self, ctx: &FixContext) -> bool {
        !ctx.content.contains("://")
    }

    fn fix(&self, ctx: &FixContext) -> String {
        let lines: Vec<Cow<str>> = ctx
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if ctx.is_text(i) {
                    Self::wrap_bare_urls(line)
                } else {
                    Cow::Borrowed(*line)
                }
            })
            .collect();

        join_lines(&lines)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD034NoBareUrls)
    }
}
