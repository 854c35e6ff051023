//! E-ink scoreboard feed builder
//!
//! Normalizes the ESPN scoreboard into uniform [`Game`] values, picks a
//! featured game, enriches it from its summary record and shapes the result
//! into a tiered JSON document that stays under a byte budget.
//!
//! # Examples
//!
//! ```rust,no_run
//! use eink_scoreboard::config::Config;
//! use eink_scoreboard::data_fetcher::{ScoreboardClient, build_document};
//! use eink_scoreboard::error::AppError;
//! use eink_scoreboard::output::{ShapeOptions, write_document};
//! use eink_scoreboard::ranking::RandomPicker;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ScoreboardClient::from_config(&config)?;
//!     let options = ShapeOptions::from_config(&config)?;
//!
//!     let fitted = build_document(&client, &options, &mut RandomPicker::from_os_rng()).await?;
//!     write_document(&fitted.document, &config.output_path, true, config.byte_budget).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Game, GameStatus};
pub use error::AppError;
pub use output::{DetailTier, OutputDocument};
pub use ranking::{FeaturedPicker, RandomPicker, rank_games};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
