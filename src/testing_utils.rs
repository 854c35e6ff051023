//! Upstream JSON fixtures shaped like the ESPN scoreboard and summary
//! endpoints, shared by unit and integration tests.

use crate::data_fetcher::models::Team;
use serde_json::{Value, json};

/// Minimal [`Team`] with an id and abbreviation.
pub fn team(id: &str, abbreviation: &str) -> Team {
    Team {
        id: id.to_string(),
        abbreviation: abbreviation.to_string(),
        ..Team::default()
    }
}

/// Scoreboard competitor record.
pub fn competitor_json(
    home_away: &str,
    id: &str,
    abbreviation: &str,
    score: &str,
    linescores: &[u32],
) -> Value {
    json!({
        "id": id,
        "homeAway": home_away,
        "score": score,
        "team": {
            "id": id,
            "abbreviation": abbreviation,
            "displayName": format!("{abbreviation} Team"),
            "shortDisplayName": abbreviation,
            "color": "000000"
        },
        "linescores": linescores.iter().map(|points| json!({"value": points})).collect::<Vec<_>>(),
        "records": [{"type": "total", "summary": "5-2"}]
    })
}

/// Scoreboard event with the given status state code (`pre`, `in`, `post`).
pub fn event_json(id: &str, state: &str, competitors: Vec<Value>) -> Value {
    json!({
        "id": id,
        "date": "2024-11-17T18:00Z",
        "name": format!("Event {id}"),
        "shortName": format!("EV {id}"),
        "season": {"year": 2024, "type": 2},
        "week": {"number": 11},
        "competitions": [{
            "competitors": competitors,
            "status": {
                "displayClock": "0:00",
                "period": 0,
                "type": {"state": state, "shortDetail": ""}
            },
            "venue": {"fullName": "Test Stadium", "address": {"city": "Kansas City", "state": "MO"}},
            "geoBroadcasts": [{"type": {"shortName": "TV"}, "media": {"shortName": "CBS"}}]
        }]
    })
}

/// Scoreboard payload wrapping `events`.
pub fn scoreboard_json(events: Vec<Value>) -> Value {
    json!({
        "season": {"year": 2024, "type": 2},
        "week": {"number": 11},
        "events": events
    })
}

fn drive_json(id: &str, plays: usize) -> Value {
    json!({
        "id": id,
        "description": format!("{plays} plays, 40 yards"),
        "team": {"abbreviation": "KC"},
        "displayResult": "Punt",
        "yards": 40,
        "offensivePlays": plays,
        "timeElapsed": {"displayValue": "3:00"},
        "start": {"text": "KC 20"},
        "end": {"text": "KC 40"},
        "isScore": false,
        "plays": (0..plays)
            .map(|n| {
                json!({"text": format!("Play {n}"), "statYardage": 5, "period": {"number": 2}})
            })
            .collect::<Vec<_>>()
    })
}

/// Summary record for a KC (home, id 12) vs BUF (away, id 2) game with every
/// section the enricher reads.
pub fn summary_json() -> Value {
    json!({
        "boxscore": {
            "teams": [
                {"homeAway": "away", "team": {"id": "2", "abbreviation": "BUF"}, "statistics": [
                    {"name": "totalYards", "label": "Total Yards", "displayValue": "301"},
                    {"name": "turnovers", "label": "Turnovers", "displayValue": "2"},
                    {"name": "totalDrives", "label": "Total Drives", "displayValue": "9"}
                ]},
                {"homeAway": "home", "team": {"id": "12", "abbreviation": "KC"}, "statistics": [
                    {"name": "totalYards", "label": "Total Yards", "displayValue": "356"},
                    {"name": "possessionTime", "label": "Possession", "displayValue": "31:48"}
                ]}
            ],
            "players": [
                {"team": {"id": "12", "abbreviation": "KC"}, "statistics": [
                    {"name": "passing", "labels": ["C/ATT", "YDS", "TD"], "totals": ["23/33", "254", "2"],
                     "athletes": [
                        {"athlete": {"displayName": "Patrick Mahomes", "shortName": "P. Mahomes"}, "stats": ["22/32", "250", "2"]},
                        {"athlete": {"displayName": "Carson Wentz", "shortName": "C. Wentz"}, "stats": ["1/1", "4", "0"]}
                     ]}
                ]},
                {"team": {"id": "2", "abbreviation": "BUF"}, "statistics": [
                    {"name": "passing", "labels": ["C/ATT", "YDS", "TD"], "totals": ["19/30", "201", "1"],
                     "athletes": [
                        {"athlete": {"displayName": "Josh Allen", "shortName": "J. Allen"}, "stats": ["19/30", "201", "1"]}
                     ]}
                ]}
            ]
        },
        "scoringPlays": [{
            "period": {"number": 1},
            "clock": {"displayValue": "8:12"},
            "team": {"id": "12", "displayName": "KC Team", "abbreviation": "KC"},
            "type": {"text": "Passing Touchdown"},
            "text": "Travis Kelce 12 Yd pass from Patrick Mahomes",
            "awayScore": 0,
            "homeScore": 7
        }],
        "drives": {
            "previous": [drive_json("1", 5), drive_json("2", 6), drive_json("3", 7)],
            "current": drive_json("4", 2)
        },
        "situation": {
            "down": 3,
            "distance": 1,
            "yardLine": 8,
            "downDistanceText": "3rd & 1 at BUF 8",
            "shortDownDistanceText": "3rd & 1",
            "team": {"id": "12", "abbreviation": "KC"},
            "isRedZone": true,
            "lastPlay": {"text": "Isiah Pacheco run for 2 yards", "type": {"text": "Rush"}, "statYardage": 2}
        },
        "leaders": [
            {"homeAway": "home", "team": {"id": "12"}, "leaders": [
                {"name": "passingYards", "leaders": [{
                    "displayValue": "254",
                    "value": 254,
                    "athlete": {"displayName": "Patrick Mahomes", "shortName": "P. Mahomes",
                                "jersey": "15", "position": {"abbreviation": "QB"},
                                "headshot": {"href": "https://a.espncdn.com/i/headshots/nfl/players/full/3139477.png"}}
                }]}
            ]}
        ],
        "gameInfo": {
            "venue": {
                "fullName": "GEHA Field at Arrowhead Stadium",
                "address": {"city": "Kansas City", "state": "MO"},
                "grass": true,
                "capacity": 76416
            },
            "weather": {"temperature": 48, "displayValue": "Cloudy", "precipitation": 10, "gust": 12},
            "attendance": 73127
        },
        "pickcenter": [{"details": "KC -2.5", "overUnder": 46.5, "provider": {"name": "ESPN BET"}}],
        "winprobability": [
            {"playId": "1", "homeWinPercentage": 0.55, "tiePercentage": 0.0},
            {"playId": "2", "homeWinPercentage": 0.61, "tiePercentage": 0.0},
            {"playId": "3", "homeWinPercentage": 0.67, "tiePercentage": 0.0}
        ],
        "predictor": {
            "header": "ESPN Analytics",
            "homeTeam": {"id": "12", "gameProjection": "58.2", "teamChanceLoss": "41.8"},
            "awayTeam": {"id": "2", "gameProjection": "41.8", "teamChanceLoss": "58.2"}
        },
        "news": {"articles": [{
            "headline": "Chiefs and Bills meet again",
            "description": "A rematch of last season's divisional round.",
            "published": "2024-11-16T14:00:00Z",
            "links": {"web": {"href": "https://www.espn.com/nfl/story/_/id/1"}}
        }]},
        "standings": {"groups": [{
            "header": "AFC West",
            "standings": {"entries": [
                {"team": "Kansas City Chiefs", "stats": [
                    {"name": "wins", "value": 9}, {"name": "losses", "value": 0}, {"name": "ties", "value": 0}
                ]}
            ]}
        }]}
    })
}
