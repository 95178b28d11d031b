//! Services API client.
//!
//! Issues the single authenticated GET against the services endpoint and
//! returns the decoded JSON body. Every failure is logged as a diagnostic
//! block before it is returned; nothing is swallowed here.

mod request;
mod response;

use log::{error, info};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::ApiKey;
use crate::error_handling::{classify_request_error, ApiError};

use request::{build_services_request, SERVICES_METHOD};
use response::decode_response;

/// Fetches the services list from the Conformity API.
///
/// Logs the outgoing request (URL and method), sends it, and decodes the
/// response body as JSON. The value is returned as-is; its shape is not
/// checked.
///
/// # Arguments
///
/// * `client` - HTTP client
/// * `url` - Services endpoint
/// * `api_key` - API key sent with the `ApiKey` authorization scheme
///
/// # Errors
///
/// Returns an `ApiError` classified as HTTP status, transport, decode or
/// unclassified. The diagnostic block is logged at error level first.
pub async fn fetch_services(
    client: &Client,
    url: &Url,
    api_key: &ApiKey,
) -> Result<Value, ApiError> {
    info!(
        "Querying the Cloud One Conformity API.\n    Api:\t{}\n    Method:\t{}",
        url, SERVICES_METHOD
    );

    match send_and_decode(client, url, api_key).await {
        Ok(value) => Ok(value),
        Err(e) => {
            error!("{}", e.diagnostic());
            Err(e)
        }
    }
}

async fn send_and_decode(
    client: &Client,
    url: &Url,
    api_key: &ApiKey,
) -> Result<Value, ApiError> {
    let response = build_services_request(client, url, api_key)
        .send()
        .await
        .map_err(classify_request_error)?;

    log::debug!(
        "Services API responded with {} ({} bytes announced)",
        response.status(),
        response
            .content_length()
            .map_or_else(|| "unknown".to_string(), |len| len.to_string())
    );

    decode_response(response).await
}
