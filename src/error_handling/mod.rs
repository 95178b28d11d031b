//! Error handling for the services query.
//!
//! This module provides:
//! - Error type definitions for initialization, the API call and the file write
//! - Categorization of `reqwest` failures into the API error taxonomy
//!
//! API errors are categorized into four mutually exclusive kinds, checked in
//! this order:
//! - **HTTP status**: the server answered with a non-2xx status
//! - **Transport**: no response was received (DNS, connect, TLS, timeout)
//! - **Decode**: a 2xx response whose body is not valid JSON
//! - **Unclassified**: anything else
//!
//! Write errors are the only recoverable category; the run reports them and
//! still completes.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, classify_request_error, root_cause_message};
pub use types::{ApiError, ApiErrorKind, InitializationError, ResponseBody, WriteError};
