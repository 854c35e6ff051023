use serde::{Deserialize, Serialize};
use std::fmt;

/// Game state derived from the upstream `status.type.state` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Final,
    #[default]
    Unknown,
}

impl GameStatus {
    /// Maps the upstream state code: `pre`, `in` and `post`; anything else is Unknown.
    pub fn from_state_code(code: &str) -> Self {
        match code {
            "pre" => GameStatus::Scheduled,
            "in" => GameStatus::InProgress,
            "post" => GameStatus::Final,
            _ => GameStatus::Unknown,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::InProgress => "In Progress",
            GameStatus::Final => "Final",
            GameStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub short_name: String,
    pub logo: String,
    pub color: String,
    pub record: String,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PeriodType {
    #[default]
    Regulation,
    Overtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Points {
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodScore {
    pub number: u32,
    #[serde(rename = "type")]
    pub period_type: PeriodType,
    pub away: Points,
    pub home: Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScorePair {
    pub away: u32,
    pub home: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scores {
    pub periods: Vec<PeriodScore>,
    pub total: ScorePair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub indoor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Broadcaster {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Odds {
    pub spread: String,
    pub over_under: f64,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Weather {
    pub temperature: i64,
    pub condition: String,
    pub precipitation: i64,
    pub gust: i64,
}

/// Season context, both per game and for the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeasonInfo {
    pub year: i64,
    #[serde(rename = "type")]
    pub season_type: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub week: i64,
}
