use regex::Regex;

/// Find the value associated with the first matching label synonym.
///
/// Labels are tried in priority order. For each label an inline match
/// ("Label: value" on one line) is attempted first, then a next-line
/// match (label at end of line, value on the first non-empty line that
/// follows). Both strategies are exhausted before moving to the next
/// synonym. Matching is case-insensitive; the captured value is trimmed
/// and must be non-empty.
///
/// A label appearing in running prose without a `:` or `-` separator is
/// deliberately not matched.
pub fn label_match(text: &str, labels: &[&str]) -> Option<String> {
    for label in labels {
        let escaped = regex::escape(label);
        if let Some(value) = inline_match(text, &escaped) {
            return Some(value);
        }
        if let Some(value) = next_line_match(text, &escaped) {
            return Some(value);
        }
    }
    None
}

fn inline_match(text: &str, escaped_label: &str) -> Option<String> {
    let pattern = format!(r"(?i){escaped_label}\s*[:\-]\s*([^\n\r]+)");
    capture_trimmed(text, &pattern)
}

fn next_line_match(text: &str, escaped_label: &str) -> Option<String> {
    // (?m) makes $ anchor at end-of-line; \s* then crosses the newline(s)
    // to the first non-empty following line.
    let pattern = format!(r"(?im){escaped_label}\s*[:\-]?\s*$\s*([^\n\r]+)");
    capture_trimmed(text, &pattern)
}

fn capture_trimmed(text: &str, pattern: &str) -> Option<String> {
    // Synonyms are escaped before interpolation, so these patterns are
    // well-formed; a build failure degrades to "not found".
    let re = Regex::new(pattern).ok()?;
    let value = re.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
