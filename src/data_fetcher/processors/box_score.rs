//! Team and player statistics from the summary `boxscore` section.

use super::enrichment::{Keep, StatDetail};
use crate::data_fetcher::fields::{Fields, find_by};
use crate::data_fetcher::models::{
    AthleteLine, PlayerStatCategory, StatLine, Team, TeamStatistics, TeamStatsPair,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Curated team statistics: output key and upstream statistic name.
pub const CURATED_STATS: &[(&str, &str)] = &[
    ("total_yards", "totalYards"),
    ("passing_yards", "netPassingYards"),
    ("rushing_yards", "rushingYards"),
    ("first_downs", "firstDowns"),
    ("third_down_efficiency", "thirdDownEff"),
    ("fourth_down_efficiency", "fourthDownEff"),
    ("total_plays", "totalPlays"),
    ("yards_per_play", "yardsPerPlay"),
    ("turnovers", "turnovers"),
    ("fumbles_lost", "fumblesLost"),
    ("interceptions", "interceptions"),
    ("penalties", "totalPenaltiesYards"),
    ("sacks", "sacksYardsLost"),
    ("red_zone_efficiency", "redZoneAttempts"),
    ("completion_pct", "completionPct"),
    ("time_of_possession", "possessionTime"),
];

/// Which side a box score entry belongs to: `homeAway` when present,
/// otherwise matched by team id.
fn side_of(entry: &Value, home: &Team, away: &Team) -> Option<&'static str> {
    match entry.str_or(&["homeAway"], "").as_str() {
        "home" => return Some("home"),
        "away" => return Some("away"),
        _ => {}
    }
    let team_id = entry.str_or(&["team", "id"], "");
    if team_id.is_empty() {
        None
    } else if team_id == home.id {
        Some("home")
    } else if team_id == away.id {
        Some("away")
    } else {
        None
    }
}

fn team_statistics(statistics: &[Value], detail: StatDetail) -> TeamStatistics {
    match detail {
        StatDetail::Verbatim => TeamStatistics::Lines(
            statistics
                .iter()
                .map(|stat| StatLine {
                    name: stat.str_or(&["name"], ""),
                    label: stat.str_or(&["label"], ""),
                    display_value: stat.str_or(&["displayValue"], ""),
                })
                .collect(),
        ),
        StatDetail::Curated => TeamStatistics::Lines(
            CURATED_STATS
                .iter()
                .filter_map(|(key, upstream)| {
                    find_by(statistics, "name", upstream).map(|stat| StatLine {
                        name: key.to_string(),
                        label: stat.str_or(&["label"], ""),
                        display_value: stat.str_or(&["displayValue"], "0"),
                    })
                })
                .collect(),
        ),
        StatDetail::CuratedValues => TeamStatistics::Values(
            CURATED_STATS
                .iter()
                .map(|(key, upstream)| {
                    let value = find_by(statistics, "name", upstream)
                        .map(|stat| stat.str_or(&["displayValue"], "0"))
                        .unwrap_or_else(|| "0".to_string());
                    (key.to_string(), value)
                })
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

/// Parses `boxscore.teams` into per-side statistics.
pub fn parse_team_stats(
    boxscore: &Value,
    home: &Team,
    away: &Team,
    detail: StatDetail,
) -> Option<TeamStatsPair> {
    let teams = boxscore.list(&["teams"]);
    if teams.is_empty() {
        return None;
    }

    let mut stats = TeamStatsPair::default();
    for entry in teams {
        let parsed = team_statistics(entry.list(&["statistics"]), detail);
        match side_of(entry, home, away) {
            Some("home") => stats.home = parsed,
            Some("away") => stats.away = parsed,
            _ => tracing::debug!(
                "Skipping box score entry for unknown team {}",
                entry.str_or(&["team", "abbreviation"], "?")
            ),
        }
    }
    Some(stats)
}

fn strings(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.str_or(&[], ""))
        .collect()
}

/// Parses `boxscore.players`, one block per team and stat category.
pub fn parse_player_stats(
    boxscore: &Value,
    home: &Team,
    away: &Team,
    athletes: Keep,
) -> Option<Vec<PlayerStatCategory>> {
    let players = boxscore.list(&["players"]);
    if players.is_empty() {
        return None;
    }

    let categories = players
        .iter()
        .flat_map(|team_block| {
            let team = team_block.str_or(&["team", "abbreviation"], "");
            let home_away = side_of(team_block, home, away).unwrap_or_default();
            team_block
                .list(&["statistics"])
                .iter()
                .map(move |category| PlayerStatCategory {
                    team: team.clone(),
                    home_away: home_away.to_string(),
                    name: category.str_or(&["name"], ""),
                    labels: strings(category.list(&["labels"])),
                    athletes: athletes.apply(
                        category
                            .list(&["athletes"])
                            .iter()
                            .map(|athlete| AthleteLine {
                                name: athlete.str_or(&["athlete", "displayName"], ""),
                                short_name: athlete.str_or(&["athlete", "shortName"], ""),
                                stats: strings(athlete.list(&["stats"])),
                            })
                            .collect(),
                    ),
                    totals: strings(category.list(&["totals"])),
                })
        })
        .collect();

    Some(categories)
}
