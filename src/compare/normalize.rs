//! Comparison-value normalizers
//!
//! Both transforms apply only to the values fed into the normalized-match
//! check, never to displayed text or to the diff rows. Whitespace collapse
//! is semantic, not line-preserving: all intra- and inter-line whitespace
//! runs become single spaces.

/// Collapse every Unicode whitespace run (including newlines) to one space.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full lower-casing for case-insensitive comparison.
pub fn normalize_case(input: &str) -> String {
    input.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize_whitespace("a  b\t\tc"), "a b c");
        assert_eq!(normalize_whitespace("a\nb\r\nc"), "a b c");
        assert_eq!(normalize_whitespace("  padded  "), "padded");
    }

    #[test]
    fn test_whitespace_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n \t "), "");
    }

    #[test]
    fn test_case_folds_to_lower() {
        assert_eq!(normalize_case("MiXeD Case"), "mixed case");
        assert_eq!(normalize_case("ÄÖÜ"), "äöü");
    }

    #[test]
    fn test_composable_in_either_order() {
        // The transforms touch disjoint properties; order cannot matter.
        let input = "Foo\t BAR\nbaz";
        assert_eq!(
            normalize_case(&normalize_whitespace(input)),
            normalize_whitespace(&normalize_case(input))
        );
    }
}
