//! Configuration types.
//!
//! This module defines the logging enums used by the CLI and the immutable
//! run configuration handed to the library.

use std::path::PathBuf;

use clap::ValueEnum;
use url::Url;

use super::api_key::ApiKey;
use super::region::{services_endpoint, Region};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Built once from the command line (or programmatically) and only read
/// afterwards. The services endpoint is derived from the region; tests point
/// it at a mock server with [`Config::with_endpoint`].
///
/// # Examples
///
/// ```no_run
/// use conformity_services::config::{ApiKey, Config, Region};
///
/// let config = Config::new(Region::Us1, ApiKey::new("abc123"), "services.json")
///     .expect("endpoint for a known region");
/// assert_eq!(
///     config.endpoint.as_str(),
///     "https://conformity.us-1.cloudone.trendmicro.com/api/services"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloud One region
    pub region: Region,

    /// API key sent with the `ApiKey` authorization scheme
    pub api_key: ApiKey,

    /// File the services JSON is written to
    pub filename: PathBuf,

    /// Services endpoint queried for this run
    pub endpoint: Url,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a configuration with the regional endpoint and default logging.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the regional endpoint cannot be assembled.
    pub fn new(
        region: Region,
        api_key: ApiKey,
        filename: impl Into<PathBuf>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            region,
            api_key,
            filename: filename.into(),
            endpoint: services_endpoint(region)?,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        })
    }

    /// Replaces the services endpoint.
    pub fn with_endpoint(self, endpoint: Url) -> Self {
        Self { endpoint, ..self }
    }
}
