//! Error types for the Collate server
//!
//! Core failures are values carried back to the boundary: which side of the
//! comparison failed, in which mode, and the decoder's own message. Page
//! handlers render them into the error banner; JSON endpoints convert them
//! through `IntoResponse`.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::format::{FormatError, Mode};

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Which submitted document an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed JSON/XML input, attributed to one side of the comparison.
    #[error("{} parse error for {}: {}", .mode.label(), .side, .source)]
    Parse {
        side: Side,
        mode: Mode,
        source: FormatError,
    },

    /// Share payload marshal/unmarshal failure; fatal to the request.
    #[error("Share payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::Parse { .. } => (StatusCode::BAD_REQUEST, "parse_error"),
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_is_side_and_mode_attributed() {
        let source = crate::format::json::pretty_print("{invalid}").unwrap_err();
        let err = AppError::Parse {
            side: Side::A,
            mode: Mode::Json,
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("JSON parse error for A: "), "got: {message}");
    }

    #[test]
    fn test_xml_parse_error_message() {
        let source = crate::format::xml::pretty_print("<a><b>").unwrap_err();
        let err = AppError::Parse {
            side: Side::B,
            mode: Mode::Xml,
            source,
        };
        assert!(err.to_string().starts_with("XML parse error for B: "));
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            AppError::NotFound("abc123".into()).to_string(),
            "Not found: abc123"
        );
    }
}
