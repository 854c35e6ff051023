use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team currently holding the ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Possession {
    pub id: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LastPlay {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub yards: i64,
}

/// Live down-and-distance state. Both the scoreboard and the summary
/// variants of the upstream block are parsed into this one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Situation {
    pub down: i64,
    pub distance: i64,
    pub yard_line: i64,
    pub down_distance_text: String,
    pub spot_text: String,
    pub possession: Possession,
    pub is_red_zone: bool,
    pub last_play: LastPlay,
}

impl Situation {
    /// Number of populated fields, used to decide whether a later
    /// situation block is at least as detailed as an earlier one.
    pub fn detail_count(&self) -> usize {
        [
            self.down != 0,
            self.distance != 0,
            self.yard_line != 0,
            !self.down_distance_text.is_empty(),
            !self.spot_text.is_empty(),
            !self.possession.id.is_empty(),
            !self.possession.team.is_empty(),
            self.is_red_zone,
            !self.last_play.text.is_empty(),
            !self.last_play.kind.is_empty(),
            self.last_play.yards != 0,
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }
}

/// Top performer of one statistical category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Leader {
    pub name: String,
    pub short_name: String,
    pub position: String,
    pub headshot: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub jersey: String,
    pub display_value: String,
    pub value: f64,
}

/// Leaders of one team keyed by category (`passing`, `rushing`, ...).
pub type TeamLeaders = BTreeMap<String, Leader>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameLeaders {
    pub away: TeamLeaders,
    pub home: TeamLeaders,
}

impl GameLeaders {
    pub fn is_empty(&self) -> bool {
        self.away.is_empty() && self.home.is_empty()
    }
}
