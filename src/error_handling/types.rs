//! Error type definitions.
//!
//! This module defines the errors produced while initializing, querying the
//! API and writing the result file.

use std::fmt;
use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::export::to_pretty_json;

/// Separator framing every diagnostic block.
const DIAGNOSTIC_RULE: &str = "----------------------------------------";

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Body of a non-2xx response, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body decoded as JSON.
    Json(Value),
    /// The body was not JSON; raw text as received.
    Text(String),
}

impl ResponseBody {
    /// Decodes `text` as JSON, falling back to the raw text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => match to_pretty_json(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{}", value),
            },
            ResponseBody::Text(text) => f.write_str(text),
        }
    }
}

/// Kinds of API failure, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ApiErrorKind {
    /// Non-2xx response
    HttpStatus,
    /// Network, DNS or TLS failure
    Transport,
    /// Malformed JSON on a 2xx response
    Decode,
    /// Anything else
    Unclassified,
}

impl ApiErrorKind {
    /// Human-readable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::HttpStatus => "HTTP status error",
            ApiErrorKind::Transport => "Transport error",
            ApiErrorKind::Decode => "JSON decode error",
            ApiErrorKind::Unclassified => "Unclassified error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of the services API call.
///
/// `Display` gives a one-line summary; [`ApiError::diagnostic`] renders the
/// full multi-line block printed before the error is returned.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API responded with HTTP status {status}")]
    Status {
        /// Status received
        status: StatusCode,
        /// Response body, parsed as JSON when possible
        body: ResponseBody,
    },

    /// The request did not reach the server.
    #[error("Could not reach the API: {reason}")]
    Transport {
        /// Innermost cause reported by the network stack
        reason: String,
        /// Underlying `reqwest` error
        #[source]
        source: ReqwestError,
    },

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Error while parsing API response at line {line}, column {column}: {message}")]
    Decode {
        /// 1-based line of the failure
        line: usize,
        /// Column of the failure (0 for an empty body)
        column: usize,
        /// Parser message without the position suffix
        message: String,
        /// Raw response body
        body: String,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// Any other failure.
    #[error("An error occurred: {description}")]
    Unclassified {
        /// Description of the underlying error
        description: String,
        /// Underlying `reqwest` error
        #[source]
        source: ReqwestError,
    },
}

impl ApiError {
    /// Builds a decode error from a `serde_json` failure and the raw body.
    pub fn from_decode(source: serde_json::Error, body: &[u8]) -> Self {
        let full = source.to_string();
        let position = format!(" at line {} column {}", source.line(), source.column());
        let message = full
            .strip_suffix(position.as_str())
            .unwrap_or(full.as_str())
            .to_string();
        ApiError::Decode {
            line: source.line(),
            column: source.column(),
            message,
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }

    /// The category of this failure.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Status { .. } => ApiErrorKind::HttpStatus,
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
            ApiError::Unclassified { .. } => ApiErrorKind::Unclassified,
        }
    }

    /// HTTP status code, for status errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Renders the multi-line diagnostic block for this failure.
    pub fn diagnostic(&self) -> String {
        let details = match self {
            ApiError::Status { status, body } => {
                format!("HTTP error code:\t{}\n\n{}", status.as_u16(), body)
            }
            ApiError::Transport { reason, .. } => format!("Could not reach the API: {}", reason),
            ApiError::Decode {
                line,
                column,
                message,
                body,
                ..
            } => format!(
                "Error while parsing API response.\n\nLine:\t{}\nColumn:\t{}\nMessage:\t{}\nResponse:\n{}",
                line, column, message, body
            ),
            ApiError::Unclassified { description, .. } => {
                format!("An error occurred: {}", description)
            }
        };
        frame(&details)
    }
}

/// Error writing the services JSON file.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The file could not be created or written.
    #[error("Error while writing JSON file {}: {source}", .path.display())]
    Io {
        /// Target path
        path: PathBuf,
        /// I/O failure
        #[source]
        source: io::Error,
    },

    /// The value could not be serialized.
    #[error("Error while serializing JSON for {}: {source}", .path.display())]
    Serialize {
        /// Target path
        path: PathBuf,
        /// Serialization failure
        #[source]
        source: serde_json::Error,
    },
}

impl WriteError {
    /// Path the write was attempted on (absolute when it could be resolved).
    pub fn path(&self) -> &PathBuf {
        match self {
            WriteError::Io { path, .. } | WriteError::Serialize { path, .. } => path,
        }
    }

    /// Renders the multi-line diagnostic block for this failure.
    pub fn diagnostic(&self) -> String {
        frame(&self.to_string())
    }
}

fn frame(details: &str) -> String {
    format!("\n{}\n{}\n{}\n", DIAGNOSTIC_RULE, details, DIAGNOSTIC_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_body_parses_json() {
        let body = ResponseBody::from_text(r#"{"error":"Unauthorized"}"#.to_string());
        assert_eq!(body, ResponseBody::Json(json!({"error": "Unauthorized"})));
    }

    #[test]
    fn test_response_body_keeps_raw_text() {
        let body = ResponseBody::from_text("<html>Bad Gateway</html>".to_string());
        assert_eq!(
            body,
            ResponseBody::Text("<html>Bad Gateway</html>".to_string())
        );
        assert_eq!(body.to_string(), "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_response_body_display_is_indented() {
        let body = ResponseBody::Json(json!({"error": "Unauthorized"}));
        assert_eq!(body.to_string(), "{\n    \"error\": \"Unauthorized\"\n}");
    }

    #[test]
    fn test_status_error_diagnostic() {
        let error = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: ResponseBody::Json(json!({"error": "Unauthorized"})),
        };
        assert_eq!(error.kind(), ApiErrorKind::HttpStatus);
        assert_eq!(error.status_code(), Some(401));

        let diagnostic = error.diagnostic();
        assert!(diagnostic.contains("HTTP error code:\t401"));
        assert!(diagnostic.contains("\"error\": \"Unauthorized\""));
        assert!(diagnostic.starts_with(&format!("\n{}\n", DIAGNOSTIC_RULE)));
        assert!(diagnostic.ends_with(&format!("\n{}\n", DIAGNOSTIC_RULE)));
    }

    #[test]
    fn test_from_decode_splits_position() {
        let body = b"{\"services\": [1, 2,]}";
        let source = serde_json::from_slice::<Value>(body).expect_err("trailing comma");
        let error = ApiError::from_decode(source, body);

        match &error {
            ApiError::Decode {
                line,
                column,
                message,
                body,
                ..
            } => {
                assert_eq!(*line, 1);
                assert!(*column > 0);
                assert!(!message.contains(" at line "));
                assert!(!message.is_empty());
                assert_eq!(body, "{\"services\": [1, 2,]}");
            }
            other => panic!("expected decode error, got {:?}", other),
        }
        assert_eq!(error.kind(), ApiErrorKind::Decode);
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_decode_error_diagnostic() {
        let body = b"not json";
        let source = serde_json::from_slice::<Value>(body).expect_err("invalid json");
        let diagnostic = ApiError::from_decode(source, body).diagnostic();

        assert!(diagnostic.contains("Error while parsing API response."));
        assert!(diagnostic.contains("Line:\t1"));
        assert!(diagnostic.contains("Column:\t"));
        assert!(diagnostic.contains("Message:\t"));
        assert!(diagnostic.contains("Response:\nnot json"));
    }

    #[test]
    fn test_decode_error_on_empty_body() {
        let source = serde_json::from_slice::<Value>(b"").expect_err("empty body");
        match ApiError::from_decode(source, b"") {
            ApiError::Decode { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 0);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_error_display_names_path() {
        let error = WriteError::Io {
            path: PathBuf::from("/missing/dir/out.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = error.to_string();
        assert!(message.contains("/missing/dir/out.json"));
        assert!(message.contains("No such file or directory"));
        assert_eq!(error.path(), &PathBuf::from("/missing/dir/out.json"));
        assert!(error.diagnostic().contains("Error while writing JSON file"));
    }
}
