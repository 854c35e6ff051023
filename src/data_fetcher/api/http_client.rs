//! HTTP client creation and configuration utilities

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with a request timeout and connection pooling.
///
/// A run issues at most two requests to the same host, so a small idle
/// pool is enough.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
