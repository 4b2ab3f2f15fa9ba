//! Normalized edit-distance ratio between two strings
//!
//! Used both as the lexical gate over domain names and as the page-title
//! similarity metric.

use strsim::normalized_levenshtein;

/// Similarity ratio in `[0, 100]` based on normalized Levenshtein distance.
///
/// Two empty strings are identical and score 100 (the
/// `normalized_levenshtein` convention). Rows of malformed input that are
/// blank on both sides would therefore pass the gate, so callers trim blank
/// lines out before gating.
pub fn ratio(a: &str, b: &str) -> u32 {
    (normalized_levenshtein(a, b) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("example.com", "example.com"), 100);
        assert_eq!(ratio("a", "a"), 100);
    }

    #[test]
    fn empty_strings_are_identical() {
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn empty_vs_nonempty_scores_zero() {
        assert_eq!(ratio("", "example.com"), 0);
        assert_eq!(ratio("example.com", ""), 0);
    }

    #[test]
    fn single_char_substitution_passes_gate() {
        // The classic homoglyph swap: l -> 1
        assert!(ratio("example.com", "examp1e.com") >= 70);
    }

    #[test]
    fn unrelated_domains_fall_below_gate() {
        assert!(ratio("example.com", "totally-unrelated.org") < 70);
    }

    #[test]
    fn ratio_is_symmetric_and_bounded() {
        let pairs = [("paypal.com", "paypa1.com"), ("a.io", "zzzzzz.org")];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a));
            assert!(ratio(a, b) <= 100);
        }
    }
}
