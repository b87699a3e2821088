//! Pretty-printers for structured comparison modes
//!
//! Structured documents are re-serialized into a canonical 2-space-indented
//! form before comparison so that formatting differences never show up as
//! diff noise. Both printers are idempotent.

pub mod json;
pub mod xml;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the submitted documents are interpreted.
///
/// Anything other than `json` or `xml` in a form value falls back to `Text`;
/// the boundary normalizes once so the core never sees a stringly-typed mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Text,
    Json,
    Xml,
}

impl Mode {
    /// Normalize a raw form value; invalid values fall back to `Text`.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "json" => Mode::Json,
            "xml" => Mode::Xml,
            _ => Mode::Text,
        }
    }

    /// Form value / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Json => "json",
            Mode::Xml => "xml",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Json => "JSON",
            Mode::Xml => "XML",
        }
    }
}

/// Pretty-printer failure, carrying the underlying decoder's message.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected end of input: {0} unclosed element(s)")]
    UnclosedElement(usize),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("re-encoded document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Canonicalize a document for its mode.
///
/// Text mode is the identity. JSON and XML are parsed and re-serialized with
/// 2-space indentation; empty or whitespace-only input yields an empty
/// string without error. The input is never mutated on failure.
pub fn pretty_print(input: &str, mode: Mode) -> Result<String, FormatError> {
    match mode {
        Mode::Text => Ok(input.to_owned()),
        Mode::Json => json::pretty_print(input),
        Mode::Xml => xml::pretty_print(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_form_value() {
        assert_eq!(Mode::from_form_value("json"), Mode::Json);
        assert_eq!(Mode::from_form_value("xml"), Mode::Xml);
        assert_eq!(Mode::from_form_value("text"), Mode::Text);
        assert_eq!(Mode::from_form_value(""), Mode::Text);
        assert_eq!(Mode::from_form_value("yaml"), Mode::Text);
        assert_eq!(Mode::from_form_value("JSON"), Mode::Text);
    }

    #[test]
    fn test_mode_wire_round_trip() {
        for mode in [Mode::Text, Mode::Json, Mode::Xml] {
            assert_eq!(Mode::from_form_value(mode.as_str()), mode);
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_text_mode_is_identity() {
        let input = "  keeps \r\n whitespace  ";
        assert_eq!(pretty_print(input, Mode::Text).unwrap(), input);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        for mode in [Mode::Json, Mode::Xml] {
            assert_eq!(pretty_print("", mode).unwrap(), "");
            assert_eq!(pretty_print("   \n\t ", mode).unwrap(), "");
        }
    }
}
