//! Normalization of scoreboard events into [`Game`] values.
//!
//! Parsing never fails. Missing or malformed fields fall back to their
//! defaults so that one odd event cannot take down the whole run.

use super::broadcasters::{fallback_team_logo, parse_broadcasters};
use super::game_status::{determine_game_status, parse_clock};
use super::leaders::parse_team_leaders;
use super::situation::parse_scoreboard_situation;
use super::time_formatting::format_display_time;
use crate::constants::{POSTSEASON_TYPE, REGULATION_PERIODS};
use crate::data_fetcher::fields::{Fields, find_by};
use crate::data_fetcher::models::{
    Game, GameLeaders, GameStatus, Odds, PeriodScore, PeriodType, Points, ScorePair, Scores,
    SeasonInfo, Team, Venue, Weather,
};
use chrono_tz::Tz;
use serde_json::Value;

static EMPTY: Value = Value::Null;

/// Competitor whose `homeAway` equals `side`, or `null`.
fn competitor<'a>(competition: &'a Value, side: &str) -> &'a Value {
    find_by(competition.list(&["competitors"]), "homeAway", side).unwrap_or(&EMPTY)
}

/// Builds a [`Team`] from a competitor record.
pub fn parse_team(competitor: &Value) -> Team {
    let abbreviation = competitor.str_or(&["team", "abbreviation"], "");
    let logo = match competitor.str_or(&["team", "logo"], "") {
        logo if logo.is_empty() => fallback_team_logo(&abbreviation),
        logo => logo,
    };
    let record = find_by(competitor.list(&["records"]), "type", "total")
        .map(|record| record.str_or(&["summary"], ""))
        .unwrap_or_default();

    Team {
        id: competitor.str_or(&["team", "id"], ""),
        name: competitor.str_or(&["team", "displayName"], ""),
        abbreviation,
        short_name: competitor.str_or(&["team", "shortDisplayName"], ""),
        logo,
        color: competitor.str_or(&["team", "color"], ""),
        record,
        score: competitor.uint_or(&["score"], 0),
    }
}

/// Zips both linescores period by period. The shorter list wins, and any
/// period past regulation is tagged as overtime.
fn parse_periods(home: &Value, away: &Value) -> Vec<PeriodScore> {
    home.list(&["linescores"])
        .iter()
        .zip(away.list(&["linescores"]))
        .enumerate()
        .map(|(index, (home_line, away_line))| PeriodScore {
            number: index as u32 + 1,
            period_type: if index >= REGULATION_PERIODS {
                PeriodType::Overtime
            } else {
                PeriodType::Regulation
            },
            away: Points {
                points: away_line.uint_or(&["value"], 0),
            },
            home: Points {
                points: home_line.uint_or(&["value"], 0),
            },
        })
        .collect()
}

pub fn parse_venue(venue: &Value) -> Venue {
    Venue {
        name: venue.str_or(&["fullName"], ""),
        city: venue.str_or(&["address", "city"], ""),
        state: venue.str_or(&["address", "state"], ""),
        indoor: venue.bool_or(&["indoor"], false),
        capacity: None,
    }
}

/// First odds line of a list, if any.
pub fn parse_odds(lines: &[Value]) -> Option<Odds> {
    let line = lines.first()?;
    Some(Odds {
        spread: line.str_or(&["details"], ""),
        over_under: line.float_or(&["overUnder"], 0.0),
        provider: line.str_or(&["provider", "name"], ""),
    })
}

pub fn parse_weather(weather: &Value) -> Option<Weather> {
    let weather = weather.section(&[])?;
    Some(Weather {
        temperature: weather.int_or(&["temperature"], 0),
        condition: weather.str_or(&["displayValue"], ""),
        precipitation: weather.int_or(&["precipitation"], 0),
        gust: weather.int_or(&["gust"], 0),
    })
}

/// Season context of one event (`season` plus `week.number`).
fn parse_event_season(event: &Value) -> SeasonInfo {
    let season_type = event.int_or(&["season", "type"], 0);
    let type_name = if season_type == POSTSEASON_TYPE {
        "Postseason"
    } else {
        "Regular Season"
    };

    SeasonInfo {
        year: event.int_or(&["season", "year"], 0),
        season_type,
        type_name: Some(type_name.to_string()),
        week: event.int_or(&["week", "number"], 0),
    }
}

/// Season context of the whole scoreboard, used for the output document.
pub fn parse_season(scoreboard: &Value) -> SeasonInfo {
    SeasonInfo {
        year: scoreboard.int_or(&["season", "year"], 0),
        season_type: scoreboard.int_or(&["season", "type"], 0),
        type_name: None,
        week: scoreboard.int_or(&["week", "number"], 0),
    }
}

/// Normalizes one upstream scoreboard event. `start_time_local` is
/// rendered in `display_timezone`.
pub fn parse_game(event: &Value, display_timezone: Tz) -> Game {
    let competition = event.at(&["competitions", "0"]).unwrap_or(&EMPTY);
    let home = competitor(competition, "home");
    let away = competitor(competition, "away");

    let home_team = parse_team(home);
    let away_team = parse_team(away);
    let status = determine_game_status(event);
    let clock = parse_clock(event);

    let situation = if status == GameStatus::InProgress {
        competition
            .at(&["situation"])
            .and_then(|block| parse_scoreboard_situation(block, &home_team, &away_team))
    } else {
        None
    };

    let leaders = GameLeaders {
        away: parse_team_leaders(away.list(&["leaders"])),
        home: parse_team_leaders(home.list(&["leaders"])),
    };

    let weather = competition
        .at(&["weather"])
        .or_else(|| event.at(&["weather"]))
        .and_then(parse_weather);

    let start_time_utc = event.str_or(&["date"], "");

    Game {
        id: event.str_or(&["id"], ""),
        display_rank: 0,
        status,
        start_time_local: format_display_time(&start_time_utc, display_timezone),
        start_time_utc,
        name: event.str_or(&["name"], ""),
        short_name: event.str_or(&["shortName"], ""),
        season: parse_event_season(event),
        scores: Scores {
            periods: parse_periods(home, away),
            total: ScorePair {
                away: away_team.score,
                home: home_team.score,
            },
        },
        away_team,
        home_team,
        venue: parse_venue(competition.at(&["venue"]).unwrap_or(&EMPTY)),
        broadcasters: parse_broadcasters(competition),
        odds: parse_odds(competition.list(&["odds"])),
        weather,
        clock: clock.clock,
        period: clock.period,
        period_detail: clock.period_detail,
        situation,
        leaders: (!leaders.is_empty()).then_some(leaders),
        ..Game::default()
    }
}

/// Normalizes every event of a scoreboard payload, in upstream order.
pub fn parse_events(scoreboard: &Value, display_timezone: Tz) -> Vec<Game> {
    scoreboard
        .list(&["events"])
        .iter()
        .map(|event| parse_game(event, display_timezone))
        .collect()
}
