use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named team statistic from the box score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatLine {
    pub name: String,
    pub label: String,
    pub display_value: String,
}

/// Team statistics in one of the enrichment detail levels: labelled lines
/// (verbatim or curated) or bare display values keyed by curated name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamStatistics {
    Lines(Vec<StatLine>),
    Values(BTreeMap<String, String>),
}

impl Default for TeamStatistics {
    fn default() -> Self {
        TeamStatistics::Lines(Vec::new())
    }
}

impl TeamStatistics {
    pub fn len(&self) -> usize {
        match self {
            TeamStatistics::Lines(lines) => lines.len(),
            TeamStatistics::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamStatsPair {
    pub away: TeamStatistics,
    pub home: TeamStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AthleteLine {
    pub name: String,
    pub short_name: String,
    pub stats: Vec<String>,
}

/// Per-player box score block for one team and one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStatCategory {
    pub team: String,
    pub home_away: String,
    pub name: String,
    pub labels: Vec<String>,
    pub athletes: Vec<AthleteLine>,
    pub totals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayTeam {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoringPlay {
    pub period: u32,
    pub clock: String,
    pub team: PlayTeam,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub away_score: u32,
    pub home_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DrivePlay {
    pub text: String,
    pub clock: String,
    pub period: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub yards: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Drive {
    pub id: String,
    pub team: String,
    pub description: String,
    pub result: String,
    pub yards: i64,
    pub offensive_plays: u32,
    pub time_elapsed: String,
    pub start: String,
    pub end: String,
    pub is_score: bool,
    pub plays: Vec<DrivePlay>,
}

/// Completed drives in game order plus the drive in progress, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DriveLog {
    pub previous: Vec<Drive>,
    pub current: Option<Drive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WinProbabilityPoint {
    pub play_id: String,
    pub home_win_percentage: f64,
    pub tie_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamProjection {
    pub id: String,
    pub game_projection: f64,
    pub team_chance_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Predictor {
    pub header: String,
    pub home: TeamProjection,
    pub away: TeamProjection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsItem {
    pub headline: String,
    pub description: String,
    pub published: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StandingsEntry {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StandingsGroup {
    pub header: String,
    pub entries: Vec<StandingsEntry>,
}
