//! Error categorization.
//!
//! Maps `reqwest` failures onto the API error taxonomy. Status errors are
//! checked first, then transport-level failures; everything else is
//! unclassified.

use std::error::Error as StdError;

use reqwest::Error as ReqwestError;

use super::types::{ApiError, ApiErrorKind, ResponseBody};

/// Categorizes a `reqwest::Error` into an `ApiErrorKind`.
///
/// A `reqwest::Error` is never a decode error here: response bodies are read
/// as bytes and decoded with `serde_json` separately, so `reqwest` only
/// reports body *read* failures, which are unclassified.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(error: &ReqwestError) -> ApiErrorKind {
    if error.status().is_some() {
        return ApiErrorKind::HttpStatus;
    }

    if error.is_connect() || error.is_timeout() || error.is_request() || error.is_redirect() {
        ApiErrorKind::Transport
    } else {
        ApiErrorKind::Unclassified
    }
}

/// Converts a `reqwest::Error` into the matching `ApiError`, keeping it as the source.
///
/// `fetch_services` never produces a status-bearing `reqwest::Error`: it
/// checks the status itself and keeps the body (see `fetch::response`). A
/// caller that uses `Response::error_for_status` still gets
/// `ApiError::Status`, with an empty body since the response is gone by then.
pub fn classify_request_error(error: ReqwestError) -> ApiError {
    match categorize_reqwest_error(&error) {
        ApiErrorKind::HttpStatus => match error.status() {
            Some(status) => ApiError::Status {
                status,
                body: ResponseBody::Text(String::new()),
            },
            None => ApiError::Unclassified {
                description: error.to_string(),
                source: error,
            },
        },
        ApiErrorKind::Transport => ApiError::Transport {
            reason: root_cause_message(&error),
            source: error,
        },
        ApiErrorKind::Decode | ApiErrorKind::Unclassified => ApiError::Unclassified {
            description: error.to_string(),
            source: error,
        },
    }
}

/// Returns the message of the innermost error in a source chain.
///
/// `reqwest` wraps the network failure in several layers ("error sending
/// request" > "client error (Connect)" > "Connection refused"); the innermost
/// one is the useful reason.
pub fn root_cause_message(error: &(dyn StdError + 'static)) -> String {
    let mut current = error;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}
