use std::fmt;

/// The character a code fence is built from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CodeFenceStyle {
    /// Backtick style (```)
    Backtick,
    /// Tilde style (~~~)
    Tilde,
}

impl CodeFenceStyle {
    pub fn marker_char(self) -> char {
        match self {
            CodeFenceStyle::Backtick => '`',
            CodeFenceStyle::Tilde => '~',
        }
    }
}

impl fmt::Display for CodeFenceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeFenceStyle::Backtick => write!(f, "backtick"),
            CodeFenceStyle::Tilde => write!(f, "tilde"),
        }
    }
}

/// An opening fence line split into its parts.
///
/// Indentation is not limited to three spaces: fences nested under list items
/// are usually indented further, and treating them as fences keeps their
/// bodies away from the indented-code conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMarker<'a> {
    /// Leading whitespace before the fence run
    pub indent: &'a str,
    pub style: CodeFenceStyle,
    /// Length of the fence run (at least 3)
    pub len: usize,
    /// Raw text after the fence run (untrimmed)
    pub info: &'a str,
}

impl<'a> FenceMarker<'a> {
    /// The fence run itself, e.g. "```" or "~~~~"
    pub fn fence(&self, line: &'a str) -> &'a str {
        let start = self.indent.len();
        &line[start..start + self.len]
    }

    /// Language tag of the block, if any
    pub fn language(&self) -> Option<&'a str> {
        self.info.split_whitespace().next()
    }
}

/// Parse an opening fence line.
pub fn parse_fence_opener(line: &str) -> Option<FenceMarker<'_>> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let style = if trimmed.starts_with("```") {
        CodeFenceStyle::Backtick
    } else if trimmed.starts_with("~~~") {
        CodeFenceStyle::Tilde
    } else {
        return None;
    };

    let marker = style.marker_char();
    let len = trimmed.chars().take_while(|&c| c == marker).count();
    let info = &trimmed[len..];

    // Backtick info strings may not contain backticks (```inline``` is a code span)
    if style == CodeFenceStyle::Backtick && info.contains('`') {
        return None;
    }

    Some(FenceMarker {
        indent,
        style,
        len,
        info,
    })
}

/// Check whether `line` closes the block opened by `opener`.
pub fn is_fence_closer(line: &str, opener: &FenceMarker<'_>) -> bool {
    let trimmed = line.trim_start();
    let marker = opener.style.marker_char();
    let len = trimmed.chars().take_while(|&c| c == marker).count();
    len >= opener.len && trimmed[len..].trim().is_empty()
}

/// A language tag can be written after a backtick fence without changing what the line is
pub fn is_usable_language(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains('`') && !tag.chars().any(char::is_whitespace)
}
