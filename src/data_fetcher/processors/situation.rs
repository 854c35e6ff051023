//! Live down-and-distance parsing.
//!
//! The scoreboard and the summary endpoints both carry a `situation` block
//! but name a few fields differently: the scoreboard reports the ball spot
//! as `possessionText` and the possessing team only by id, while the summary
//! reports `shortDownDistanceText` and may embed a `team` object. Both are
//! parsed into the same [`Situation`].

use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::{LastPlay, Possession, Situation, Team};
use serde_json::Value;

fn parse_last_play(block: &Value) -> LastPlay {
    LastPlay {
        text: block.str_or(&["lastPlay", "text"], ""),
        kind: block.str_or(&["lastPlay", "type", "text"], ""),
        yards: block.int_or(&["lastPlay", "statYardage"], 0),
    }
}

/// Abbreviation of whichever side has id `team_id`.
fn team_abbreviation(team_id: &str, home: &Team, away: &Team) -> String {
    if team_id.is_empty() {
        String::new()
    } else if team_id == home.id {
        home.abbreviation.clone()
    } else if team_id == away.id {
        away.abbreviation.clone()
    } else {
        String::new()
    }
}

fn first_non_empty(candidates: [String; 2]) -> String {
    candidates
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Parses the `competitions[].situation` block of a scoreboard event.
pub fn parse_scoreboard_situation(block: &Value, home: &Team, away: &Team) -> Option<Situation> {
    let block = block.section(&[])?;
    let possession_id = block.str_or(&["possession"], "");

    Some(Situation {
        down: block.int_or(&["down"], 0),
        distance: block.int_or(&["distance"], 0),
        yard_line: block.int_or(&["yardLine"], 0),
        down_distance_text: block.str_or(&["downDistanceText"], ""),
        spot_text: first_non_empty([
            block.str_or(&["possessionText"], ""),
            block.str_or(&["shortDownDistanceText"], ""),
        ]),
        possession: Possession {
            team: team_abbreviation(&possession_id, home, away),
            id: possession_id,
        },
        is_red_zone: block.bool_or(&["isRedZone"], false),
        last_play: parse_last_play(block),
    })
}

/// Parses the top-level `situation` block of a summary record.
pub fn parse_summary_situation(block: &Value, home: &Team, away: &Team) -> Option<Situation> {
    let block = block.section(&[])?;
    let possession_id = first_non_empty([
        block.str_or(&["possession"], ""),
        block.str_or(&["team", "id"], ""),
    ]);
    let team = first_non_empty([
        block.str_or(&["team", "abbreviation"], ""),
        team_abbreviation(&possession_id, home, away),
    ]);

    Some(Situation {
        down: block.int_or(&["down"], 0),
        distance: block.int_or(&["distance"], 0),
        yard_line: block.int_or(&["yardLine"], 0),
        down_distance_text: block.str_or(&["downDistanceText"], ""),
        spot_text: first_non_empty([
            block.str_or(&["shortDownDistanceText"], ""),
            block.str_or(&["possessionText"], ""),
        ]),
        possession: Possession {
            id: possession_id,
            team,
        },
        is_red_zone: block.bool_or(&["isRedZone"], false),
        last_play: parse_last_play(block),
    })
}
