use super::fetch_utils::fetch_json;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_scoreboard_url, build_summary_url};
use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;
use tracing::{instrument, warn};

/// Client for the scoreboard and summary endpoints of the sports API.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScoreboardClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Builds a client with the configured base URL, credential and timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            config.api_base_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Fetches the scoreboard. Any failure is returned to the caller and
    /// ends the run.
    #[instrument(skip(self))]
    pub async fn fetch_index(&self) -> Result<Value, AppError> {
        let url = build_scoreboard_url(&self.base_url);
        fetch_json(&self.client, &url, self.api_key.as_deref()).await
    }

    /// Fetches the summary record of one event. Failures are logged and
    /// reported as `None` so the run can continue without enrichment.
    #[instrument(skip(self))]
    pub async fn fetch_detail(&self, event_id: &str) -> Option<Value> {
        let url = build_summary_url(&self.base_url, event_id);
        match fetch_json(&self.client, &url, self.api_key.as_deref()).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Could not load summary for event {event_id}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"events": [{"id": "1"}]})),
            )
            .mount(&server)
            .await;

        let client = ScoreboardClient::new(create_test_http_client(), server.uri(), None);
        let index = client.fetch_index().await.unwrap();
        assert_eq!(index["events"][0]["id"], "1");
    }

    #[tokio::test]
    async fn test_fetch_index_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ScoreboardClient::new(create_test_http_client(), server.uri(), None);
        assert!(client.fetch_index().await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary"))
            .and(query_param("event", "401"))
            .and(query_param("apikey", "k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"boxscore": {}})))
            .mount(&server)
            .await;

        let client = ScoreboardClient::new(
            create_test_http_client(),
            server.uri(),
            Some("k".to_string()),
        );
        assert!(client.fetch_detail("401").await.is_some());
    }

    #[tokio::test]
    async fn test_fetch_detail_soft_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ScoreboardClient::new(create_test_http_client(), server.uri(), None);
        assert!(client.fetch_detail("401").await.is_none());
    }
}
