use super::common::{Broadcaster, GameStatus, Odds, Scores, SeasonInfo, Team, Venue, Weather};
use super::detailed::{
    DriveLog, NewsItem, PlayerStatCategory, Predictor, ScoringPlay, StandingsGroup, TeamStatsPair,
    WinProbabilityPoint,
};
use super::live::{GameLeaders, Situation};
use serde::{Deserialize, Serialize};

/// One sporting event, normalized from the scoreboard and optionally
/// enriched from the per-event summary.
///
/// The enrichment fields stay `None` unless the game was featured and its
/// summary could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Game {
    pub id: String,
    pub display_rank: u32,
    pub status: GameStatus,
    pub start_time_utc: String,
    pub start_time_local: String,
    pub name: String,
    pub short_name: String,
    pub season: SeasonInfo,
    pub away_team: Team,
    pub home_team: Team,
    pub venue: Venue,
    pub broadcasters: Vec<Broadcaster>,
    pub scores: Scores,
    pub odds: Option<Odds>,
    pub weather: Option<Weather>,
    pub clock: String,
    pub period: u32,
    pub period_detail: String,
    pub situation: Option<Situation>,
    pub leaders: Option<GameLeaders>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<TeamStatsPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_stats: Option<Vec<PlayerStatCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_plays: Option<Vec<ScoringPlay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drives: Option<DriveLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_probability: Option<Vec<WinProbabilityPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictor: Option<Predictor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<NewsItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standings: Option<Vec<StandingsGroup>>,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True once any summary section has been attached.
    pub fn is_enriched(&self) -> bool {
        self.stats.is_some()
            || self.player_stats.is_some()
            || self.scoring_plays.is_some()
            || self.drives.is_some()
            || self.win_probability.is_some()
            || self.predictor.is_some()
            || self.attendance.is_some()
            || self.news.is_some()
            || self.standings.is_some()
    }

    /// "AWAY @ HOME" label used in log lines.
    pub fn matchup(&self) -> String {
        format!(
            "{} @ {}",
            self.away_team.abbreviation, self.home_team.abbreviation
        )
    }
}
