use regex::Regex;
use std::sync::LazyLock;

/// ATX heading: up to three spaces, 1-6 hashes, whitespace, then the text
static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( {0,3})(#{1,6})([ \t]+)(.*)$").unwrap());

/// Represents an ATX heading line split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxHeading<'a> {
    pub indent: &'a str,
    pub level: usize,
    /// Whitespace between the hashes and the text
    pub spacing: &'a str,
    /// Heading text including any trailing whitespace
    pub text: &'a str,
}

impl AtxHeading<'_> {
    /// Rebuild the line with a different level and text, keeping indentation and spacing
    pub fn render(&self, level: usize, text: &str) -> String {
        format!("{}{}{}{}", self.indent, "#".repeat(level), self.spacing, text)
    }
}

/// Utility functions for working with Markdown headings
pub struct HeadingUtils;

impl HeadingUtils {
    /// Parse a line as an ATX heading. Lines with no heading text are not headings.
    pub fn parse_atx_heading(line: &str) -> Option<AtxHeading<'_>> {
        let caps = ATX_HEADING.captures(line)?;
        let text = caps.get(4).map_or("", |m| m.as_str());
        if text.trim().is_empty() {
            return None;
        }

        Some(AtxHeading {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            level: caps.get(2).map_or(0, |m| m.as_str().len()),
            spacing: caps.get(3).map_or("", |m| m.as_str()),
            text,
        })
    }

    pub fn is_heading(line: &str) -> bool {
        Self::parse_atx_heading(line).is_some()
    }

    pub fn is_top_level_heading(line: &str) -> bool {
        Self::parse_atx_heading(line).is_some_and(|h| h.level == 1)
    }

    /// Derive a title from a file name: stem only, runs of `-`/`_` become a
    /// single space, and every word starts with an uppercase letter.
    /// Control characters are treated as separators so the title stays on one line.
    pub fn title_from_file_name(file_name: &str) -> String {
        let stem = std::path::Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut title = String::with_capacity(stem.len());
        let mut prev_is_word = false;
        let mut prev_is_separator = false;

        for c in stem.chars() {
            if c == '-' || c == '_' || c.is_control() {
                if !prev_is_separator {
                    title.push(' ');
                }
                prev_is_separator = true;
                prev_is_word = false;
                continue;
            }
            prev_is_separator = false;

            if c.is_alphanumeric() {
                if prev_is_word {
                    title.push(c);
                } else {
                    title.extend(c.to_uppercase());
                }
                prev_is_word = true;
            } else {
                title.push(c);
                prev_is_word = false;
            }
        }

        title.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_atx_heading() {
        let heading = HeadingUtils::parse_atx_heading("## Setup steps").unwrap();
        assert_eq!(heading.level, 2);
        assert_eq!(heading.text, "Setup steps");
        assert_eq!(heading.indent, "");
    }

    #[test]
    fn test_not_headings() {
        assert!(!HeadingUtils::is_heading("#hashtag"));
        assert!(!HeadingUtils::is_heading("#"));
        assert!(!HeadingUtils::is_heading("#   "));
        assert!(!HeadingUtils::is_heading("####### seven"));
        assert!(!HeadingUtils::is_heading("    # indented code"));
    }

    #[test]
    fn test_top_level_heading() {
        assert!(HeadingUtils::is_top_level_heading("# Title"));
        assert!(HeadingUtils::is_top_level_heading("  #\tTitle"));
        assert!(!HeadingUtils::is_top_level_heading("## Section"));
    }

    #[test]
    fn test_render_keeps_indent_and_spacing() {
        let heading = HeadingUtils::parse_atx_heading(" #  Title").unwrap();
        assert_eq!(heading.render(2, "Title"), " ##  Title");
    }

    #[test]
    fn test_title_from_file_name() {
        assert_eq!(HeadingUtils::title_from_file_name("getting-started.md"), "Getting Started");
        assert_eq!(HeadingUtils::title_from_file_name("my__notes_v2.md"), "My Notes V2");
        assert_eq!(HeadingUtils::title_from_file_name("docs/api-reference.md"), "Api Reference");
        assert_eq!(HeadingUtils::title_from_file_name("README.md"), "README");
        assert_eq!(HeadingUtils::title_from_file_name("--.md"), "");
        assert_eq!(HeadingUtils::title_from_file_name("two\nlines.md"), "Two Lines");
    }
}
