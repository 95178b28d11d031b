//! conformity_services library: Cloud One Conformity services query
//!
//! This library fetches the list of services supported by the Cloud One
//! Conformity API for one region and writes the JSON response to a file.
//!
//! # Example
//!
//! ```no_run
//! use conformity_services::config::{ApiKey, Config, Region};
//! use conformity_services::run_query;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(Region::Us1, ApiKey::new("my-api-key"), "services.json")?;
//!
//! let report = run_query(&config).await?;
//! if let Ok(path) = &report.output {
//!     println!("Services written to {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, Region};
pub use error_handling::{ApiError, ApiErrorKind, WriteError};
pub use fetch::fetch_services;
pub use run::{error_summary, run_query, QueryReport};

// Internal run module (contains the query orchestration)
mod run {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::error;
    use serde_json::Value;

    use crate::config::Config;
    use crate::error_handling::{ApiError, WriteError};
    use crate::export::write_json;
    use crate::fetch::fetch_services;
    use crate::initialization::init_client;

    /// Outcome of a completed services query.
    ///
    /// The query itself succeeded; writing the file may still have failed,
    /// which is reported here rather than as an error.
    #[derive(Debug)]
    pub struct QueryReport {
        /// Decoded services response
        pub services: Value,
        /// Absolute path written, or the write failure
        pub output: Result<PathBuf, WriteError>,
    }

    impl QueryReport {
        /// Whether the services file was written.
        pub fn written(&self) -> bool {
            self.output.is_ok()
        }

        /// The line printed after a successful write, naming `filename` as given.
        ///
        /// `None` when the write failed; that failure was already logged.
        pub fn confirmation(&self, filename: &Path) -> Option<String> {
            self.written()
                .then(|| format!("Wrote json file {}", filename.display()))
        }
    }

    /// One-line summary of a failed run.
    ///
    /// An [`ApiError`] already carries the useful part of its source in its
    /// own message, so only the outermost context and the `ApiError` are
    /// printed. Other failures print the whole chain.
    pub fn error_summary(error: &anyhow::Error) -> String {
        match error.downcast_ref::<ApiError>() {
            Some(api_error) if error.to_string() != api_error.to_string() => {
                format!("{}: {}", error, api_error)
            }
            Some(api_error) => api_error.to_string(),
            None => format!("{:#}", error),
        }
    }

    /// Runs the services query with the provided configuration.
    ///
    /// Sends one request to `config.endpoint`, then writes the response to
    /// `config.filename`. Steps run strictly in sequence and are not retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the API call
    /// fails (the underlying [`crate::ApiError`] can be recovered with
    /// `downcast_ref`). A failed file write is not an error: it is logged and
    /// returned in [`QueryReport::output`].
    pub async fn run_query(config: &Config) -> Result<QueryReport> {
        let client = init_client().context("Failed to initialize HTTP client")?;

        let services = fetch_services(&client, &config.endpoint, &config.api_key)
            .await
            .context("Failed to query the services API")?;

        let output = write_json(&services, &config.filename).await;
        if let Err(e) = &output {
            error!("{}", e.diagnostic());
        }

        Ok(QueryReport { services, output })
    }
}
