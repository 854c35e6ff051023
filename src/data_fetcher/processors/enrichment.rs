//! Enrichment of the featured game from its summary record.
//!
//! How much of the summary is attached is controlled by an
//! [`EnrichmentPolicy`], derived from the [`DetailTier`] the game will be
//! shaped with. Every section is parsed independently: a missing or
//! malformed section leaves the corresponding field untouched.

use super::box_score::{parse_player_stats, parse_team_stats};
use super::drives::{parse_drive_log, parse_scoring_plays};
use super::game_info::{
    parse_attendance, parse_detailed_venue, parse_detailed_weather, parse_news, parse_standings,
};
use super::leaders::parse_game_leaders;
use super::normalizer::parse_odds;
use super::predictions::{parse_predictor, parse_win_probability};
use super::situation::parse_summary_situation;
use crate::constants::enrichment::{
    STANDARD_ATHLETES_PER_CATEGORY, STANDARD_WIN_PROBABILITY_POINTS,
};
use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::Game;
use crate::output::DetailTier;
use serde_json::Value;
use tracing::debug;

static EMPTY: Value = Value::Null;

/// How many items of a list survive enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    All,
    First(usize),
    Last(usize),
}

impl Keep {
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        match self {
            Keep::All => items,
            Keep::First(n) => {
                items.truncate(n);
                items
            }
            Keep::Last(n) => {
                let excess = items.len().saturating_sub(n);
                items.drain(..excess);
                items
            }
        }
    }
}

/// Detail level of the team statistics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDetail {
    /// Every upstream statistic with name, label and display value.
    Verbatim,
    /// The curated allow-list, labels kept.
    Curated,
    /// The curated allow-list as bare display values; missing entries are "0".
    CuratedValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentPolicy {
    pub team_stats: StatDetail,
    pub drives: Keep,
    /// `None` leaves player statistics out entirely.
    pub athletes: Option<Keep>,
    pub win_probability: Keep,
    pub include_news: bool,
    pub include_standings: bool,
}

impl EnrichmentPolicy {
    pub fn for_tier(tier: DetailTier, drive_limit: usize) -> Self {
        match tier {
            DetailTier::Full => Self {
                team_stats: StatDetail::Verbatim,
                drives: Keep::All,
                athletes: Some(Keep::All),
                win_probability: Keep::All,
                include_news: true,
                include_standings: true,
            },
            DetailTier::Standard => Self {
                team_stats: StatDetail::Curated,
                drives: Keep::Last(drive_limit),
                athletes: Some(Keep::First(STANDARD_ATHLETES_PER_CATEGORY)),
                win_probability: Keep::Last(STANDARD_WIN_PROBABILITY_POINTS),
                include_news: false,
                include_standings: false,
            },
            DetailTier::Minimal => Self {
                team_stats: StatDetail::CuratedValues,
                drives: Keep::Last(drive_limit),
                athletes: None,
                win_probability: Keep::Last(1),
                include_news: false,
                include_standings: false,
            },
        }
    }
}

/// Attaches the summary record's sections to `game`.
///
/// Returns `false` and leaves the game untouched when there is no usable
/// summary (absent, not an object, or empty).
pub fn enrich_game(game: &mut Game, summary: Option<&Value>, policy: &EnrichmentPolicy) -> bool {
    let Some(summary) = summary.filter(|s| s.as_object().is_some_and(|map| !map.is_empty()))
    else {
        debug!("No summary for game {}, leaving it unenriched", game.id);
        return false;
    };

    let home = game.home_team.clone();
    let away = game.away_team.clone();
    let boxscore = summary.at(&["boxscore"]).unwrap_or(&EMPTY);
    let game_info = summary.at(&["gameInfo"]).unwrap_or(&EMPTY);

    if let Some(stats) = parse_team_stats(boxscore, &home, &away, policy.team_stats) {
        game.stats = Some(stats);
    }
    if let Some(keep) = policy.athletes
        && let Some(players) = parse_player_stats(boxscore, &home, &away, keep)
    {
        game.player_stats = Some(players);
    }
    if summary.at(&["scoringPlays"]).is_some() {
        game.scoring_plays = Some(parse_scoring_plays(summary.list(&["scoringPlays"])));
    }
    if let Some(drives) = summary
        .at(&["drives"])
        .and_then(|drives| parse_drive_log(drives, policy.drives))
    {
        game.drives = Some(drives);
    }

    if game.is_live()
        && let Some(situation) = summary
            .at(&["situation"])
            .and_then(|block| parse_summary_situation(block, &home, &away))
    {
        let existing = game.situation.as_ref().map_or(0, |s| s.detail_count());
        if situation.detail_count() >= existing {
            game.situation = Some(situation);
        }
    }

    let leaders = parse_game_leaders(summary.list(&["leaders"]), &home, &away);
    if !leaders.is_empty() {
        game.leaders = Some(leaders);
    }

    if let Some(venue) = parse_detailed_venue(game_info) {
        game.venue = venue;
    }
    if let Some(weather) = parse_detailed_weather(game_info) {
        game.weather = Some(weather);
    }
    if let Some(attendance) = parse_attendance(game_info) {
        game.attendance = Some(attendance);
    }

    if game.odds.is_none() {
        game.odds = parse_odds(summary.list(&["pickcenter"]));
    }

    if let Some(series) =
        parse_win_probability(summary.list(&["winprobability"]), policy.win_probability)
    {
        game.win_probability = Some(series);
    }
    if let Some(predictor) = summary.at(&["predictor"]).and_then(parse_predictor) {
        game.predictor = Some(predictor);
    }

    if policy.include_news
        && let Some(news) = summary.at(&["news"]).and_then(parse_news)
    {
        game.news = Some(news);
    }
    if policy.include_standings
        && let Some(standings) = summary.at(&["standings"]).and_then(parse_standings)
    {
        game.standings = Some(standings);
    }

    debug!("Enriched game {} ({})", game.id, game.matchup());
    true
}
