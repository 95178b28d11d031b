//! Request building for the services endpoint.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::config::{authorization_value, ApiKey, CONTENT_TYPE_JSON_API};

/// Method used for the services query.
pub(crate) const SERVICES_METHOD: Method = Method::GET;

/// Builds the authenticated services request.
///
/// Headers:
/// - `Authorization: ApiKey <key>`
/// - `Content-Type: application/vnd.api+json`
///
/// An API key that is not a valid header value does not fail here; `reqwest`
/// records it and reports a builder error when the request is sent.
pub(crate) fn build_services_request(
    client: &Client,
    url: &Url,
    api_key: &ApiKey,
) -> RequestBuilder {
    client
        .request(SERVICES_METHOD, url.clone())
        .header(AUTHORIZATION, authorization_value(api_key.as_str()))
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON_API)
}
