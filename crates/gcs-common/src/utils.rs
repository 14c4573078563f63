//! Shared utility functions.

/// Truncates a string to a maximum number of characters with ellipsis.
///
/// Counts characters rather than bytes so Cyrillic and Arabic text is never
/// split inside a code point. The result never exceeds `max_chars`; limits
/// too small for the ellipsis keep a plain prefix.
#[must_use]
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else if max_chars < 3 {
        input.chars().take(max_chars).collect()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Collapses line breaks and tabs so a string fits on one report line.
#[must_use]
pub fn single_line(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\n' => '⏎',
            '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        let truncated = truncate_string(input, 20);
        assert_eq!(truncated, "This is a very lo...");

        let short = "Short";
        let not_truncated = truncate_string(short, 20);
        assert_eq!(not_truncated, "Short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let truncated = truncate_string("Автоматическое подслеживание", 10);
        assert_eq!(truncated, "Автомат...");
    }

    #[test]
    fn test_truncate_string_never_exceeds_limit() {
        assert_eq!(truncate_string("Камера", 0), "");
        assert_eq!(truncate_string("Камера", 1), "К");
        assert_eq!(truncate_string("Камера", 2), "Ка");
        assert_eq!(truncate_string("Камера", 3), "...");
        for max_chars in 0..8 {
            assert!(truncate_string("Подслеживание", max_chars).chars().count() <= max_chars);
        }
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\tb\nc"), "a b⏎c");
    }
}
