use regex::Regex;
use std::sync::LazyLock;

/// Top-level unordered item: marker at column 0 followed by whitespace
static TOP_LEVEL_UNORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+][ \t]+").unwrap());

/// Top-level ordered item: digits, `.` or `)`, whitespace
static TOP_LEVEL_ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)][ \t]+").unwrap());

/// Ordered item at any indentation with a `.` delimiter
/// Captures: (indent)(number)(spacing)
pub static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([ \t]*)(\d+)\.([ \t]+)").unwrap());

/// Utility functions for detecting list items
pub struct ListUtils;

impl ListUtils {
    /// A thematic break: three or more of the same `-`, `*` or `_`, optionally spaced
    pub fn is_thematic_break(line: &str) -> bool {
        let trimmed = line.trim();
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        if !matches!(first, '-' | '*' | '_') {
            return false;
        }

        let mut count = 0;
        for c in trimmed.chars() {
            if c == first {
                count += 1;
            } else if c != ' ' && c != '\t' {
                return false;
            }
        }
        count >= 3
    }

    /// List item starting at column 0 (nested items are indented and do not count)
    pub fn is_top_level_list_item(line: &str) -> bool {
        if Self::is_thematic_break(line) {
            return false;
        }
        TOP_LEVEL_UNORDERED.is_match(line) || TOP_LEVEL_ORDERED.is_match(line)
    }

    /// Top-level unordered item using the `*` marker
    pub fn is_top_level_asterisk_item(line: &str) -> bool {
        line.starts_with('*') && TOP_LEVEL_UNORDERED.is_match(line) && !Self::is_thematic_break(line)
    }
}
