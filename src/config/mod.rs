//! Application configuration and constants.
//!
//! This module provides:
//! - Endpoint and output constants
//! - HTTP header name and value constants for the Conformity API
//! - CLI option types and parsing
//! - The region enumeration and the redacted API key type

mod api_key;
mod cli;
mod constants;
mod headers;
mod region;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;

pub use api_key::ApiKey;
pub use cli::Cli;
pub use region::{services_endpoint, Region};
pub use types::{Config, LogFormat, LogLevel};
