use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::{GameLeaders, Leader, Team, TeamLeaders};
use serde_json::Value;

/// Builds a [`Leader`] from the first entry of a category's `leaders` list.
fn top_leader(category: &Value) -> Option<Leader> {
    let top = category.list(&["leaders"]).first()?;

    // Summary records nest the headshot as `{href}`, scoreboard ones use a plain string.
    let headshot = match top.at(&["athlete", "headshot"]) {
        Some(Value::Object(_)) => top.str_or(&["athlete", "headshot", "href"], ""),
        _ => top.str_or(&["athlete", "headshot"], ""),
    };

    Some(Leader {
        name: top.str_or(&["athlete", "displayName"], ""),
        short_name: top.str_or(&["athlete", "shortName"], ""),
        position: top.str_or(&["athlete", "position", "abbreviation"], ""),
        headshot,
        jersey: top.str_or(&["athlete", "jersey"], ""),
        display_value: top.str_or(&["displayValue"], ""),
        value: top.float_or(&["value"], 0.0),
    })
}

/// Parses one competitor's scoreboard `leaders` list.
///
/// Categories are keyed without their `Leader` suffix, so `passingLeader`
/// becomes `passing`. Categories without any athlete are dropped.
pub fn parse_team_leaders(categories: &[Value]) -> TeamLeaders {
    categories
        .iter()
        .filter_map(|category| {
            let name = category.str_or(&["name"], "");
            let key = name.strip_suffix("Leader").unwrap_or(&name);
            if key.is_empty() {
                return None;
            }
            top_leader(category).map(|leader| (key.to_string(), leader))
        })
        .collect()
}

/// Parses the summary record's top-level `leaders` list.
///
/// Each entry belongs to one team. The side comes from `homeAway` when
/// present, otherwise from matching the entry's team id.
pub fn parse_game_leaders(entries: &[Value], home: &Team, away: &Team) -> GameLeaders {
    let mut leaders = GameLeaders::default();

    for entry in entries {
        let team_id = entry.str_or(&["team", "id"], "");
        let side = match entry.str_or(&["homeAway"], "").as_str() {
            "home" => &mut leaders.home,
            "away" => &mut leaders.away,
            _ if !team_id.is_empty() && team_id == home.id => &mut leaders.home,
            _ if !team_id.is_empty() && team_id == away.id => &mut leaders.away,
            _ => continue,
        };

        *side = entry
            .list(&["leaders"])
            .iter()
            .filter_map(|category| {
                let name = category.str_or(&["name"], "");
                if name.is_empty() {
                    return None;
                }
                top_leader(category).map(|leader| (name, leader))
            })
            .collect();
    }

    leaders
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scoreboard_leaders_strip_suffix() {
        let categories = json!([
            {"name": "passingLeader", "leaders": [{
                "displayValue": "21/30, 254 YDS, 2 TD",
                "value": 254.0,
                "athlete": {
                    "displayName": "Patrick Mahomes",
                    "shortName": "P. Mahomes",
                    "headshot": "https://a.espncdn.com/i/headshots/nfl/players/full/3139477.png",
                    "position": {"abbreviation": "QB"}
                }
            }]},
            {"name": "rushingLeader", "leaders": []},
            {"name": "receivingLeader", "leaders": [{"value": "88", "athlete": {"displayName": "Travis Kelce"}}]}
        ]);
        let leaders = parse_team_leaders(categories.as_array().unwrap());

        assert_eq!(leaders.len(), 2);
        let passing = &leaders["passing"];
        assert_eq!(passing.short_name, "P. Mahomes");
        assert_eq!(passing.position, "QB");
        assert_eq!(passing.value, 254.0);
        assert!(passing.headshot.ends_with("3139477.png"));
        assert_eq!(leaders["receiving"].value, 88.0);
        assert!(!leaders.contains_key("rushing"));
    }

    #[test]
    fn test_summary_leaders_by_side() {
        let home = Team {
            id: "12".to_string(),
            ..Team::default()
        };
        let away = Team {
            id: "2".to_string(),
            ..Team::default()
        };
        let entries = json!([
            {"homeAway": "away", "team": {"id": "2"}, "leaders": [
                {"name": "passingYards", "leaders": [{
                    "displayValue": "254",
                    "value": 254,
                    "athlete": {"displayName": "Josh Allen", "jersey": "17",
                                "headshot": {"href": "https://example.test/allen.png"}}
                }]}
            ]},
            {"team": {"id": "12"}, "leaders": [
                {"name": "rushingYards", "leaders": [{"athlete": {"displayName": "Isiah Pacheco"}}]}
            ]},
            {"team": {"id": "99"}, "leaders": [
                {"name": "sacks", "leaders": [{"athlete": {"displayName": "Nobody"}}]}
            ]}
        ]);
        let leaders = parse_game_leaders(entries.as_array().unwrap(), &home, &away);

        let allen = &leaders.away["passingYards"];
        assert_eq!(allen.jersey, "17");
        assert_eq!(allen.headshot, "https://example.test/allen.png");
        assert_eq!(leaders.home["rushingYards"].name, "Isiah Pacheco");
        assert_eq!(leaders.home.len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(parse_team_leaders(&[]).is_empty());
        assert!(parse_game_leaders(&[], &Team::default(), &Team::default()).is_empty());
    }
}
