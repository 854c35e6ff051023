pub mod client;
pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod urls;

pub use client::ScoreboardClient;
pub use fetch_utils::fetch_json;
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{build_document, run};
pub use urls::{build_scoreboard_url, build_summary_url};
