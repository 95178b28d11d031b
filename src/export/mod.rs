//! Export of the services response.
//!
//! This module writes the decoded API response back to disk as a
//! pretty-printed JSON file.

mod json;

pub use json::{to_pretty_json, write_json};
