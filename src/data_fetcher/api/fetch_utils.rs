//! Generic HTTP fetching with status-aware error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Maps a non-success HTTP status to the matching [`AppError`].
fn status_error(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Fetches `url` once and parses the body as JSON.
///
/// When `api_key` is set it is sent as the `apikey` query parameter; it is
/// never logged. Failures are not retried: the caller decides whether a
/// failed request aborts the run.
///
/// # Errors
/// * `NetworkTimeout` / `NetworkConnection` for transport failures
/// * `ApiNotFound`, `ApiClientError`, `ApiRateLimit`, `ApiServerError` or
///   `ApiServiceUnavailable` for non-2xx responses
/// * `ApiNoData`, `ApiMalformedJson` or `ApiUnexpectedStructure` when the
///   body cannot be parsed into `T`
#[instrument(skip(client, api_key))]
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.query(&[("apikey", key)]);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(status_error(status, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;
    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
