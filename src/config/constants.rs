//! Configuration constants.
//!
//! This module defines the fixed values the tool relies on: the Conformity
//! endpoint template, the JSON output layout and user-facing text.

/// Scheme and host prefix of the Conformity API, before the region code.
pub const ENDPOINT_HOST_PREFIX: &str = "https://conformity.";

/// Host suffix following the region code.
pub const ENDPOINT_HOST_SUFFIX: &str = ".cloudone.trendmicro.com";

/// Path of the services resource on every regional host.
pub const SERVICES_PATH: &str = "/api/services";

/// Indentation used when writing the services JSON file (4 spaces).
pub const JSON_INDENT: &[u8] = b"    ";

/// Public documentation of the services endpoint, shown in `--help`.
pub const SERVICES_API_DOCS_URL: &str =
    "https://cloudone.trendmicro.com/docs/conformity/api-reference/tag/Services";

/// Name used in user-facing error output.
pub const BINARY_NAME: &str = "get-services";
