//! JSON pretty-printer
//!
//! Parses into a generic `serde_json::Value` and re-serializes with 2-space
//! indentation. The `arbitrary_precision` feature keeps number literals
//! digit-for-digit, so large integers are not rounded through f64 on the
//! way back out. Object keys serialize in map order (sorted), which makes
//! the output stable regardless of input key order.

use serde_json::Value;

use super::FormatError;

/// Re-serialize a JSON document with 2-space indentation.
///
/// Empty or whitespace-only input yields an empty string. Idempotent for
/// valid input.
pub fn pretty_print(input: &str) -> Result<String, FormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_is_indented_and_key_sorted() {
        let out = pretty_print(r#"{"name":"John","age":30}"#).unwrap();
        assert_eq!(out, "{\n  \"age\": 30,\n  \"name\": \"John\"\n}");
    }

    #[test]
    fn test_whitespace_variants_canonicalize_equal() {
        let a = pretty_print(r#"{"name":"John","age":30}"#).unwrap();
        let b = pretty_print(r#"{"name": "John", "age": 30}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent() {
        let once = pretty_print(r#"{"a":[1,2,{"b":null}],"c":true}"#).unwrap();
        let twice = pretty_print(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nesting_preserved() {
        let out = pretty_print(r#"{"outer":{"inner":[1,2]}}"#).unwrap();
        assert_eq!(
            out,
            "{\n  \"outer\": {\n    \"inner\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_large_integers_survive() {
        // Beyond f64's 2^53 integer range; must not round.
        let out = pretty_print("{\"n\": 12345678901234567890}").unwrap();
        assert!(out.contains("12345678901234567890"), "got: {out}");
    }

    #[test]
    fn test_scalar_documents_accepted() {
        assert_eq!(pretty_print("42").unwrap(), "42");
        assert_eq!(pretty_print("\"s\"").unwrap(), "\"s\"");
        assert_eq!(pretty_print("null").unwrap(), "null");
    }

    #[test]
    fn test_invalid_input_errors() {
        let err = pretty_print("{invalid}").unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(pretty_print("{\"a\": }").is_err());
    }

    #[test]
    fn test_no_trailing_newline() {
        let out = pretty_print("[1]").unwrap();
        assert!(!out.ends_with('\n'));
    }
}
