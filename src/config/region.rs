//! Cloud One service regions.
//!
//! Each region maps to its own Conformity API host
//! (`conformity.<region>.cloudone.trendmicro.com`).

use clap::ValueEnum;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use url::Url;

use super::constants::{ENDPOINT_HOST_PREFIX, ENDPOINT_HOST_SUFFIX, SERVICES_PATH};

/// Cloud One service region.
///
/// The set is closed: any other code is rejected while parsing arguments,
/// before a request can be built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum Region {
    /// United States
    #[value(name = "us-1")]
    #[strum(serialize = "us-1")]
    Us1,
    /// India
    #[value(name = "in-1")]
    #[strum(serialize = "in-1")]
    In1,
    /// United Kingdom
    #[value(name = "gb-1")]
    #[strum(serialize = "gb-1")]
    Gb1,
    /// Japan
    #[value(name = "jp-1")]
    #[strum(serialize = "jp-1")]
    Jp1,
    /// Germany
    #[value(name = "de-1")]
    #[strum(serialize = "de-1")]
    De1,
    /// Australia
    #[value(name = "au-1")]
    #[strum(serialize = "au-1")]
    Au1,
    /// Canada
    #[value(name = "ca-1")]
    #[strum(serialize = "ca-1")]
    Ca1,
    /// Singapore
    #[value(name = "sg-1")]
    #[strum(serialize = "sg-1")]
    Sg1,
    /// Trend Micro internal US region
    #[value(name = "trend-us-1")]
    #[strum(serialize = "trend-us-1")]
    TrendUs1,
}

impl Region {
    /// Short region code as used in host names and on the command line.
    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

/// Builds the services endpoint for a region.
///
/// # Errors
///
/// Returns `url::ParseError` if the assembled URL is not valid. This cannot
/// happen for the fixed region codes but is propagated rather than assumed.
pub fn services_endpoint(region: Region) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}{}{}{}",
        ENDPOINT_HOST_PREFIX,
        region.code(),
        ENDPOINT_HOST_SUFFIX,
        SERVICES_PATH
    ))
}
