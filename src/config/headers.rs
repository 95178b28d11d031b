//! HTTP header constants.
//!
//! The Conformity API authenticates with a custom `ApiKey` authorization
//! scheme and expects the JSON:API media type on every request.

/// Authorization scheme prefix; the header value is `ApiKey <key>`.
pub const AUTHORIZATION_SCHEME: &str = "ApiKey";

/// JSON:API media type sent as `Content-Type`.
pub const CONTENT_TYPE_JSON_API: &str = "application/vnd.api+json";

/// Builds the `Authorization` header value for an API key.
pub fn authorization_value(api_key: &str) -> String {
    format!("{} {}", AUTHORIZATION_SCHEME, api_key)
}
