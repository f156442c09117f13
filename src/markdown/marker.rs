//! Classification of list markers at the start of a line.

use once_cell::sync::Lazy;
use regex::Regex;

/// An unbroken digit run, a literal dot, then whitespace-prefixed content
/// or nothing at all. `"12.foo"` is not a list item; `"12."` and
/// `"12. foo"` are.
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(\s.*|)$").expect("valid regex"));

/// The shape of a list marker found at the start of a line.
///
/// Classification is closed: callers match exhaustively instead of poking
/// at marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// `- ` bullet.
    Bullet,
    /// `* ` bullet. Never produced for a `* * *` horizontal rule.
    Star,
    /// `- [ ] ` / `- [x] ` / `- [X] ` GitHub-style checkbox.
    Checkbox {
        /// Whether the box is ticked (`x` or `X`).
        checked: bool,
    },
    /// `N. ` ordered item carrying its declared number.
    Ordered(u32),
}

/// Classify the list marker opening a line, if any.
///
/// Leading whitespace is ignored for classification (use
/// [`leading_whitespace`] to recover it). `None` is the common case for
/// non-list lines and means "defer to default editing behavior".
pub fn classify(line: &str) -> Option<MarkerShape> {
    let rest = line.trim_start_matches([' ', '\t']);

    if rest.starts_with("- [ ] ") {
        return Some(MarkerShape::Checkbox { checked: false });
    }
    if rest.starts_with("- [x] ") || rest.starts_with("- [X] ") {
        return Some(MarkerShape::Checkbox { checked: true });
    }
    if rest.starts_with("- ") {
        return Some(MarkerShape::Bullet);
    }
    if rest.starts_with("* ") && line.trim() != "* * *" {
        return Some(MarkerShape::Star);
    }
    ordered_number(rest).map(MarkerShape::Ordered)
}

/// Parse an ordered-list numeral at the start of `text`.
///
/// Mirrors the marker rule exactly: digits, a dot, then whitespace or end
/// of line. Returns `None` for anything else, including a zero numeral
/// (`0.` lines are plain text) and numbers too large to represent.
pub fn ordered_number(text: &str) -> Option<u32> {
    let captures = ORDERED.captures(text)?;
    captures[1].parse().ok().filter(|&n| n > 0)
}

/// The run of leading spaces and tabs on a line.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Bullets and stars ---

    #[test]
    fn test_dash_bullet() {
        assert_eq!(classify("- item"), Some(MarkerShape::Bullet));
        assert_eq!(classify("- "), Some(MarkerShape::Bullet));
    }

    #[test]
    fn test_star_bullet() {
        assert_eq!(classify("* item"), Some(MarkerShape::Star));
        assert_eq!(classify("* "), Some(MarkerShape::Star));
    }

    #[test]
    fn test_horizontal_rule_is_not_a_star_item() {
        assert_eq!(classify("* * *"), None);
        assert_eq!(classify("\t* * *"), None);
    }

    #[test]
    fn test_star_line_resembling_rule_with_content() {
        // Only the exact `* * *` line is excluded.
        assert_eq!(classify("* * * x"), Some(MarkerShape::Star));
    }

    #[test]
    fn test_bare_dash_or_star_without_space() {
        assert_eq!(classify("-item"), None);
        assert_eq!(classify("*item"), None);
        assert_eq!(classify("-"), None);
        assert_eq!(classify("*"), None);
    }

    // --- Checkboxes ---

    #[test]
    fn test_unchecked_checkbox() {
        assert_eq!(
            classify("- [ ] task"),
            Some(MarkerShape::Checkbox { checked: false })
        );
    }

    #[test]
    fn test_checked_checkbox_both_cases() {
        assert_eq!(
            classify("- [x] task"),
            Some(MarkerShape::Checkbox { checked: true })
        );
        assert_eq!(
            classify("- [X] task"),
            Some(MarkerShape::Checkbox { checked: true })
        );
    }

    #[test]
    fn test_malformed_checkbox_is_a_plain_bullet() {
        assert_eq!(classify("- [y] task"), Some(MarkerShape::Bullet));
        assert_eq!(classify("- [] task"), Some(MarkerShape::Bullet));
    }

    // --- Ordered items ---

    #[test]
    fn test_ordered_with_content() {
        assert_eq!(classify("1. foo"), Some(MarkerShape::Ordered(1)));
        assert_eq!(classify("42. foo"), Some(MarkerShape::Ordered(42)));
    }

    #[test]
    fn test_ordered_bare_numeral() {
        assert_eq!(classify("7."), Some(MarkerShape::Ordered(7)));
    }

    #[test]
    fn test_ordered_requires_whitespace_after_dot() {
        assert_eq!(classify("1.foo"), None);
        assert_eq!(classify("1"), None);
    }

    #[test]
    fn test_zero_numeral_is_plain_text() {
        assert_eq!(classify("0. foo"), None);
        assert_eq!(ordered_number("0. foo"), None);
        assert_eq!(classify("10. foo"), Some(MarkerShape::Ordered(10)));
    }

    #[test]
    fn test_ordered_number_direct() {
        assert_eq!(ordered_number("3. x"), Some(3));
        assert_eq!(ordered_number("3.\tx"), Some(3));
        assert_eq!(ordered_number("3."), Some(3));
        assert_eq!(ordered_number("x 3."), None);
        assert_eq!(ordered_number(""), None);
    }

    // --- Indentation ---

    #[test]
    fn test_classification_ignores_leading_whitespace() {
        assert_eq!(classify("\t\t- foo"), Some(MarkerShape::Bullet));
        assert_eq!(classify("  1. foo"), Some(MarkerShape::Ordered(1)));
    }

    #[test]
    fn test_leading_whitespace_helper() {
        assert_eq!(leading_whitespace("\t\t- foo"), "\t\t");
        assert_eq!(leading_whitespace("  \tx"), "  \t");
        assert_eq!(leading_whitespace("x"), "");
        assert_eq!(leading_whitespace(""), "");
        assert_eq!(leading_whitespace(" \t "), " \t ");
    }

    // --- Non-list lines ---

    #[test]
    fn test_plain_text_is_none() {
        assert_eq!(classify("hello"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("# heading"), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ordered_numeral_roundtrips(n in 1u32..1_000_000) {
                let line = format!("{n}. item");
                prop_assert_eq!(classify(&line), Some(MarkerShape::Ordered(n)));
            }

            #[test]
            fn classify_never_panics(line in ".*") {
                let _ = classify(&line);
            }

            #[test]
            fn leading_whitespace_is_a_prefix(line in ".*") {
                let ws = leading_whitespace(&line);
                prop_assert!(line.starts_with(ws));
                prop_assert!(ws.chars().all(|c| c == ' ' || c == '\t'));
            }
        }
    }
}
