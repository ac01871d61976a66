/// Collapse `\r\n` and lone `\r` to `\n`.
///
/// PDF text extraction backends disagree on line endings; everything
/// downstream assumes `\n`. No other normalization (case, accents,
/// whitespace) happens here.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_collapsed() {
        assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_lone_cr_collapsed() {
        assert_eq!(normalize_line_endings("a\rb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_mixed_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_line_endings("a\r\nb\rc");
        assert_eq!(normalize_line_endings(&once), once);
    }

    #[test]
    fn test_no_other_transformation() {
        assert_eq!(normalize_line_endings("  A:  b  "), "  A:  b  ");
    }
}
