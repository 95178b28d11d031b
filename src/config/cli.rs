//! Command-line interface.
//!
//! Arguments are validated here, before any network activity: clap rejects
//! unknown regions and missing or empty values with a usage error.

use std::path::PathBuf;

use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::Parser;

use super::api_key::ApiKey;
use super::region::Region;
use super::types::{Config, LogFormat, LogLevel};

const LONG_ABOUT: &str = "get-services
Queries the services API and stores the results in a file.
See the API documentation for more details at \
https://cloudone.trendmicro.com/docs/conformity/api-reference/tag/Services";

/// Command-line options for `get-services`.
#[derive(Debug, Parser)]
#[command(
    name = "get-services",
    version,
    about = "Queries the Cloud One Conformity services API and stores the results in a file",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Cloud One Service Region
    #[arg(long, value_enum)]
    pub region: Region,

    /// Cloud One API Key with administration rights
    #[arg(long = "apiKey", value_name = "API_KEY", value_parser = parse_api_key)]
    pub api_key: ApiKey,

    /// Name the file that will be created
    #[arg(long, value_parser = NonEmptyStringValueParser::new().map(PathBuf::from))]
    pub filename: PathBuf,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

fn parse_api_key(value: &str) -> Result<ApiKey, String> {
    if value.is_empty() {
        return Err("API key must not be empty".to_string());
    }
    Ok(ApiKey::from(value.to_string()))
}

impl TryFrom<Cli> for Config {
    type Error = url::ParseError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config::new(cli.region, cli.api_key, cli.filename)?;
        Ok(Config {
            log_level: cli.log_level,
            log_format: cli.log_format,
            ..config
        })
    }
}
