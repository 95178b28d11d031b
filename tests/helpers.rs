// Shared test helpers for mock-server setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use conformity_services::config::{ApiKey, Config, Region};
use std::path::Path;
use url::Url;
use wiremock::MockServer;

/// Services endpoint on a mock server.
pub fn mock_endpoint(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/services", server.uri())).expect("mock server uri is a valid url")
}

/// Endpoint on a local port with nothing listening.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_endpoint() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind local port");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{}/api/services", port)).expect("valid url")
}

/// Creates a config pointed at a mock server.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(server: &MockServer, api_key: &str, filename: &Path) -> Config {
    Config::new(Region::Us1, ApiKey::new(api_key), filename)
        .expect("Failed to build config")
        .with_endpoint(mock_endpoint(server))
}
