//! Allow-list sanitization for caller-supplied configuration values.
//!
//! Configuration values (spacing tokens, colors, lengths) are interpolated
//! directly into generated style text, so this filter is the only boundary
//! between a caller-controlled string and the shared stylesheet. Anything
//! outside the allow-list is silently dropped: the call never errors, and a
//! hostile value degrades into a harmless (possibly empty) one.

/// Strips every character not on the style-value allow-list.
///
/// Allowed characters are ASCII alphanumerics plus `.`, `(`, `)`, `%`,
/// space, `-`, `+`, `*`, and `/` — enough for lengths, percentages,
/// `calc()` and `var()` expressions, and keyword values, but nothing that
/// can open or close a rule body, terminate a declaration, or start a
/// comment.
///
/// The filter is idempotent: sanitizing an already-sanitized string is a
/// no-op.
///
/// # Example
///
/// ```rust
/// use instill::sanitize;
///
/// assert_eq!(sanitize("calc(100% - 2rem)"), "calc(100% - 2rem)");
/// assert_eq!(sanitize("red; } body { display:none"), "red  body  displaynone");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| is_allowed(*c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '.' | '(' | ')' | '%' | ' ' | '-' | '+' | '*' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_passes_clean_values() {
        assert_eq!(sanitize("var(--s1)"), "var(--s1)");
        assert_eq!(sanitize("1.5rem"), "1.5rem");
        assert_eq!(sanitize("50%"), "50%");
        assert_eq!(sanitize("calc(2 * var(--s0) + 1px)"), "calc(2 * var(--s0) + 1px)");
    }

    #[test]
    fn test_sanitize_strips_rule_delimiters() {
        assert_eq!(sanitize("red;}{"), "red");
        assert_eq!(sanitize("a:b"), "ab");
    }

    #[test]
    fn test_sanitize_strips_markup_and_quotes() {
        assert_eq!(sanitize("<script>"), "script");
        assert_eq!(sanitize("\"red\""), "red");
        assert_eq!(sanitize("'red'"), "red");
    }

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!(sanitize("1rem\u{202e}"), "1rem");
        assert_eq!(sanitize("ré d"), "r d");
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_all_stripped() {
        assert_eq!(sanitize(";{}<>\"'"), "");
    }

    proptest! {
        #[test]
        fn prop_sanitize_idempotent(s in ".*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn prop_sanitize_never_emits_unsafe_chars(s in ".*") {
            let out = sanitize(&s);
            for c in ['{', '}', ';', '<', '>', '"', '\''] {
                prop_assert!(!out.contains(c));
            }
        }

        #[test]
        fn prop_sanitize_output_is_allow_listed(s in ".*") {
            prop_assert!(sanitize(&s).chars().all(is_allowed));
        }
    }
}
