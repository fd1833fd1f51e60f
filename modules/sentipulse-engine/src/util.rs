/// Truncate to at most `max_chars` characters on a UTF-8 boundary.
/// Byte slicing would split multi-byte characters in non-English text.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Round to exactly three decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_based() {
        assert_eq!(truncate_chars("economía", 7), "economí");
        assert_eq!(truncate_chars("short", 500), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn round3_rounds_half_away() {
        assert_eq!(round3(0.8499999), 0.85);
        assert_eq!(round3(0.42), 0.42);
        assert_eq!(round3(0.1235), 0.124);
    }
}
