//! One fetch-rank-enrich-shape pass over the upstream API.

use super::client::ScoreboardClient;
use crate::config::Config;
use crate::data_fetcher::processors::{parse_events, parse_season};
use crate::error::AppError;
use crate::output::{FittedDocument, ShapeOptions, fit_to_budget, write_document};
use crate::ranking::{FeaturedPicker, rank_games};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, error, info, instrument};

/// Builds the dashboard document.
///
/// The scoreboard is fetched first; if that fails nothing else happens and
/// the error is returned. Only the rank 1 game has its summary fetched, and
/// a failed summary fetch leaves it unenriched.
#[instrument(skip_all)]
pub async fn build_document(
    client: &ScoreboardClient,
    options: &ShapeOptions,
    picker: &mut impl FeaturedPicker,
) -> Result<FittedDocument, AppError> {
    let fetched_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let scoreboard = client.fetch_index().await?;

    let season = parse_season(&scoreboard);
    let games = parse_events(&scoreboard, options.display_timezone);
    info!("Found {} games", games.len());

    let ranked = rank_games(games, picker);
    for game in &ranked {
        debug!("{}. {} ({})", game.display_rank, game.matchup(), game.status);
    }

    let summary = match ranked.first() {
        Some(featured) => client.fetch_detail(&featured.id).await,
        None => None,
    };

    fit_to_budget(&ranked, summary.as_ref(), &season, &fetched_at, options)
}

/// Builds the document and writes it to `config.output_path` (plus the
/// pretty copy when enabled).
///
/// Nothing is written when the scoreboard fetch fails.
#[instrument(skip_all, fields(output = %config.output_path))]
pub async fn run(
    client: &ScoreboardClient,
    options: &ShapeOptions,
    picker: &mut impl FeaturedPicker,
    config: &Config,
) -> Result<FittedDocument, AppError> {
    let fitted = match build_document(client, options, picker).await {
        Ok(fitted) => fitted,
        Err(e) => {
            error!("Failed to fetch scoreboard, nothing written: {e}");
            return Err(e);
        }
    };
    info!(
        "Featured tier {} ({} bytes, budget {})",
        fitted.featured_tier, fitted.size, options.byte_budget
    );

    write_document(
        &fitted.document,
        &config.output_path,
        config.write_pretty_copy,
        options.byte_budget,
    )
    .await?;

    Ok(fitted)
}
