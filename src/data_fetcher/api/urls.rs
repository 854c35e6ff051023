//! URL building utilities for API endpoints

/// Builds the scoreboard URL listing the current slate of games.
///
/// # Example
/// ```
/// use eink_scoreboard::data_fetcher::api::build_scoreboard_url;
///
/// let url = build_scoreboard_url("https://api.example.com/football/nfl/");
/// assert_eq!(url, "https://api.example.com/football/nfl/scoreboard");
/// ```
pub fn build_scoreboard_url(api_base_url: &str) -> String {
    format!("{}/scoreboard", api_base_url.trim_end_matches('/'))
}

/// Builds the summary URL with the detailed record of one event.
///
/// # Example
/// ```
/// use eink_scoreboard::data_fetcher::api::build_summary_url;
///
/// let url = build_summary_url("https://api.example.com/football/nfl", "401671789");
/// assert_eq!(url, "https://api.example.com/football/nfl/summary?event=401671789");
/// ```
pub fn build_summary_url(api_base_url: &str, event_id: &str) -> String {
    format!(
        "{}/summary?event={event_id}",
        api_base_url.trim_end_matches('/')
    )
}
