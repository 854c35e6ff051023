use super::enrichment::Keep;
use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::{Drive, DriveLog, DrivePlay, PlayTeam, ScoringPlay};
use serde_json::Value;

/// Parses the summary `scoringPlays` list in game order.
pub fn parse_scoring_plays(plays: &[Value]) -> Vec<ScoringPlay> {
    plays
        .iter()
        .map(|play| ScoringPlay {
            period: play.uint_or(&["period", "number"], 0),
            clock: play.str_or(&["clock", "displayValue"], ""),
            team: PlayTeam {
                id: play.str_or(&["team", "id"], ""),
                name: play.str_or(&["team", "displayName"], ""),
                abbreviation: play.str_or(&["team", "abbreviation"], ""),
                logo: play.str_or(&["team", "logo"], ""),
            },
            kind: play.str_or(&["type", "text"], ""),
            text: play.str_or(&["text"], ""),
            away_score: play.uint_or(&["awayScore"], 0),
            home_score: play.uint_or(&["homeScore"], 0),
        })
        .collect()
}

fn parse_drive_play(play: &Value) -> DrivePlay {
    DrivePlay {
        text: play.str_or(&["text"], ""),
        clock: play.str_or(&["clock", "displayValue"], ""),
        period: play.uint_or(&["period", "number"], 0),
        kind: play.str_or(&["type", "text"], ""),
        yards: play.int_or(&["statYardage"], 0),
    }
}

pub fn parse_drive(drive: &Value) -> Drive {
    let result = match drive.str_or(&["displayResult"], "") {
        display if display.is_empty() => drive.str_or(&["result"], ""),
        display => display,
    };

    Drive {
        id: drive.str_or(&["id"], ""),
        team: drive.str_or(&["team", "abbreviation"], ""),
        description: drive.str_or(&["description"], ""),
        result,
        yards: drive.int_or(&["yards"], 0),
        offensive_plays: drive.uint_or(&["offensivePlays"], 0),
        time_elapsed: drive.str_or(&["timeElapsed", "displayValue"], ""),
        start: drive.str_or(&["start", "text"], ""),
        end: drive.str_or(&["end", "text"], ""),
        is_score: drive.bool_or(&["isScore"], false),
        plays: drive.list(&["plays"]).iter().map(parse_drive_play).collect(),
    }
}

/// Parses the summary `drives` section.
///
/// `previous` is trimmed by `keep`. When the log is capped, the current
/// drive is kept only once it has recorded plays.
pub fn parse_drive_log(drives: &Value, keep: Keep) -> Option<DriveLog> {
    let drives = drives.section(&[])?;

    let previous = keep.apply(
        drives
            .list(&["previous"])
            .iter()
            .map(parse_drive)
            .collect(),
    );
    let current = drives
        .section(&["current"])
        .map(parse_drive)
        .filter(|drive| keep == Keep::All || !drive.plays.is_empty());

    Some(DriveLog { previous, current })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn drive(id: &str, plays: usize) -> Value {
        json!({
            "id": id,
            "description": "8 plays, 75 yards, 4:12",
            "team": {"abbreviation": "KC"},
            "displayResult": "Touchdown",
            "yards": 75,
            "offensivePlays": 8,
            "timeElapsed": {"displayValue": "4:12"},
            "start": {"text": "KC 25"},
            "end": {"text": "BUF 0"},
            "isScore": true,
            "plays": (0..plays).map(|n| json!({"text": format!("play {n}"), "statYardage": 5})).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_parse_drive() {
        let parsed = parse_drive(&drive("1", 2));
        assert_eq!(parsed.result, "Touchdown");
        assert_eq!(parsed.time_elapsed, "4:12");
        assert_eq!(parsed.start, "KC 25");
        assert!(parsed.is_score);
        assert_eq!(parsed.plays.len(), 2);
        assert_eq!(parsed.plays[1].yards, 5);
    }

    #[test]
    fn test_capped_log_keeps_last_completed_drives() {
        let drives = json!({
            "previous": [drive("1", 3), drive("2", 3), drive("3", 3)],
            "current": drive("4", 1)
        });
        let log = parse_drive_log(&drives, Keep::Last(2)).unwrap();
        let ids: Vec<_> = log.previous.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(log.current.unwrap().id, "4");
    }

    #[test]
    fn test_capped_log_drops_current_without_plays() {
        let drives = json!({"previous": [drive("1", 3)], "current": drive("2", 0)});
        assert!(parse_drive_log(&drives, Keep::Last(2)).unwrap().current.is_none());
        assert!(parse_drive_log(&drives, Keep::All).unwrap().current.is_some());
    }

    #[test]
    fn test_uncapped_log_keeps_everything() {
        let drives = json!({"previous": [drive("1", 1), drive("2", 1), drive("3", 1)]});
        let log = parse_drive_log(&drives, Keep::All).unwrap();
        assert_eq!(log.previous.len(), 3);
        assert!(log.current.is_none());
        assert!(parse_drive_log(&json!({}), Keep::All).is_none());
    }

    #[test]
    fn test_scoring_plays() {
        let plays = json!([{
            "period": {"number": 2},
            "clock": {"displayValue": "1:04"},
            "team": {"id": "12", "displayName": "Kansas City Chiefs", "abbreviation": "KC"},
            "type": {"text": "Passing Touchdown"},
            "text": "Travis Kelce 12 Yd pass from Patrick Mahomes",
            "awayScore": 10,
            "homeScore": "14"
        }]);
        let parsed = parse_scoring_plays(plays.as_array().unwrap());
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].period, 2);
        assert_eq!(parsed[0].team.abbreviation, "KC");
        assert_eq!(parsed[0].kind, "Passing Touchdown");
        assert_eq!(parsed[0].home_score, 14);
    }
}
