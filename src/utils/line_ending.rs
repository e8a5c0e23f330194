use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// The dominant line ending of `content`. Ties and documents without any
/// line break count as LF.
pub fn detect_line_ending(content: &str) -> LineEnding {
    let crlf_count = content.matches("\r\n").count();
    let lf_count = content.matches('\n').count() - crlf_count;

    if crlf_count > lf_count {
        LineEnding::Crlf
    } else {
        LineEnding::Lf
    }
}

/// Convert every CRLF to LF
pub fn normalize_to_lf(content: &str) -> Cow<'_, str> {
    if content.contains("\r\n") {
        Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Write LF-normalized content back out with the given line ending
pub fn restore_line_ending(content: String, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf => content,
        LineEnding::Crlf => content.replace('\n', ending.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(detect_line_ending("hello\nworld"), LineEnding::Lf);
        assert_eq!(detect_line_ending("hello\r\nworld"), LineEnding::Crlf);
        assert_eq!(detect_line_ending("hello\r\nworld\nmixed"), LineEnding::Lf); // tie goes to LF
        assert_eq!(detect_line_ending("a\r\nb\r\nc\n"), LineEnding::Crlf);
        assert_eq!(detect_line_ending("no line endings"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_to_lf() {
        assert_eq!(normalize_to_lf("hello\r\nworld"), "hello\nworld");
        assert!(matches!(normalize_to_lf("hello\nworld"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_restore_line_ending() {
        assert_eq!(restore_line_ending("a\nb\n".to_string(), LineEnding::Crlf), "a\r\nb\r\n");
        assert_eq!(restore_line_ending("a\nb\n".to_string(), LineEnding::Lf), "a\nb\n");
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    }
}
