//! Positional placeholder substitution.

use std::fmt::Display;

/// Positional arguments for `%1`, `%2`, ... placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationArgs {
    values: Vec<String>,
}

impl TranslationArgs {
    /// Create an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append the next positional argument.
    pub fn push(&mut self, value: impl Display) -> &mut Self {
        self.values.push(value.to_string());
        self
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, value: impl Display) -> Self {
        self.push(value);
        self
    }

    /// Value for placeholder `%n` (one-based).
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Display> FromIterator<T> for TranslationArgs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Substitute `%1`..`%99` in `text` with the supplied arguments.
///
/// Every occurrence of a placeholder is replaced, so `"%1x%1"` with `5`
/// becomes `"5x5"`. Two-digit placeholders are used when that many arguments
/// were supplied; otherwise the first digit alone is the placeholder.
/// Placeholders without a matching argument, `%0` and a lone `%` are kept
/// as literal text. Substituted values are never scanned again.
#[must_use]
pub fn substitute(text: &str, args: &TranslationArgs) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let first = bytes.get(i + 1).copied().filter(u8::is_ascii_digit);
        let second = bytes.get(i + 2).copied().filter(u8::is_ascii_digit);

        let replacement = first.and_then(|d1| {
            let one = usize::from(d1 - b'0');
            let two = second.map(|d2| one * 10 + usize::from(d2 - b'0'));
            match two.and_then(|n| args.get(n).map(|value| (value, 3))) {
                Some(found) => Some(found),
                None => args.get(one).map(|value| (value, 2)),
            }
        });

        match replacement {
            Some((value, width)) => {
                out.push_str(&text[literal_start..i]);
                out.push_str(value);
                i += width;
                literal_start = i;
            }
            None => i += 1,
        }
    }

    out.push_str(&text[literal_start..]);
    out
}

/// Build `Option<TranslationArgs>` from positional values.
///
/// ```rust
/// use gcs_i18n::tr_args;
///
/// let args = tr_args!["192.168.0.10", 5600];
/// assert_eq!(args.map(|a| a.len()), Some(2));
/// ```
#[macro_export]
macro_rules! tr_args {
    () => {
        None::<$crate::TranslationArgs>
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.push($value);
        )+
        Some(args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn args(values: &[&str]) -> TranslationArgs {
        values.iter().collect()
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(substitute("Size %1x%1", &args(&["5"])), "Size 5x5");
    }

    #[test]
    fn test_missing_arguments_stay_literal() {
        assert_eq!(substitute("Size %1x%1", &TranslationArgs::new()), "Size %1x%1");
        assert_eq!(substitute("URL: %1:%2", &args(&["host"])), "URL: host:%2");
    }

    #[test]
    fn test_out_of_order_placeholders() {
        assert_eq!(
            substitute("До Шир:%2\tДол:%1", &args(&["27.5", "53.9"])),
            "До Шир:53.9\tДол:27.5"
        );
    }

    #[test]
    fn test_two_digit_placeholders() {
        let many: TranslationArgs = (1..=10).collect();
        assert_eq!(substitute("%10-%1", &many), "10-1");

        // With a single argument, %10 reads as %1 followed by a literal 0
        assert_eq!(substitute("%10", &args(&["x"])), "x0");
    }

    #[test]
    fn test_percent_edge_cases() {
        let one = args(&["v"]);
        assert_eq!(substitute("100%", &one), "100%");
        assert_eq!(substitute("%0 %% %a", &one), "%0 %% %a");
        assert_eq!(substitute("%%1", &one), "%v");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        assert_eq!(substitute("%1 %2", &args(&["%2", "b"])), "%2 b");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(substitute("Камера %1", &args(&["№2"])), "Камера №2");
    }

    #[test]
    fn test_macro() {
        let args = tr_args![1, "two", 3.5].unwrap();
        assert_eq!(args.get(1), Some("1"));
        assert_eq!(args.get(2), Some("two"));
        assert_eq!(args.get(3), Some("3.5"));
        assert_eq!(args.get(0), None);
        assert!(tr_args!().is_none());
    }

    proptest! {
        #[test]
        fn prop_text_without_percent_is_unchanged(text in "[^%]*", value in ".*") {
            let args = args(&[value.as_str()]);
            prop_assert_eq!(substitute(&text, &args), text);
        }

        #[test]
        fn prop_empty_args_is_identity(text in ".*") {
            prop_assert_eq!(substitute(&text, &TranslationArgs::new()), text);
        }

        #[test]
        fn prop_single_placeholder_is_replaced(prefix in "[^%]*", suffix in "[^%0-9]*", value in "[^%]*") {
            let text = format!("{prefix}%1{suffix}");
            let args = args(&[value.as_str()]);
            prop_assert_eq!(substitute(&text, &args), format!("{prefix}{value}{suffix}"));
        }
    }
}
