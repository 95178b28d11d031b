//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the services query.
///
/// Creates a `reqwest::Client` with:
/// - A `get-services/<version>` User-Agent
/// - Redirect following (reqwest default, up to 10 hops)
/// - Rustls TLS backend (no native TLS)
///
/// No request timeout is configured; the call waits for the transport's own
/// connect and read behaviour.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot
/// be initialized.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(concat!("get-services/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
