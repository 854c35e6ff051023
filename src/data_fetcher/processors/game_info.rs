//! Venue, attendance, news and standings sections of the summary record.

use super::normalizer::parse_weather;
use crate::data_fetcher::fields::{Fields, find_by};
use crate::data_fetcher::models::{NewsItem, StandingsEntry, StandingsGroup, Venue, Weather};
use serde_json::Value;

/// Parses `gameInfo.venue`. Unlike the scoreboard venue it carries the
/// capacity, and `indoor` is inferred from the playing surface when absent.
pub fn parse_detailed_venue(game_info: &Value) -> Option<Venue> {
    let venue = game_info.section(&["venue"])?;
    let indoor = match venue.at(&["indoor"]) {
        Some(_) => venue.bool_or(&["indoor"], false),
        None => !venue.bool_or(&["grass"], true),
    };

    Some(Venue {
        name: venue.str_or(&["fullName"], ""),
        city: venue.str_or(&["address", "city"], ""),
        state: venue.str_or(&["address", "state"], ""),
        indoor,
        capacity: venue.at(&["capacity"]).map(|_| venue.uint_or(&["capacity"], 0)),
    })
}

pub fn parse_detailed_weather(game_info: &Value) -> Option<Weather> {
    game_info.at(&["weather"]).and_then(parse_weather)
}

pub fn parse_attendance(game_info: &Value) -> Option<u32> {
    game_info
        .at(&["attendance"])
        .map(|_| game_info.uint_or(&["attendance"], 0))
}

/// Parses `news.articles`.
pub fn parse_news(news: &Value) -> Option<Vec<NewsItem>> {
    let articles = news.list(&["articles"]);
    if articles.is_empty() {
        return None;
    }

    Some(
        articles
            .iter()
            .map(|article| NewsItem {
                headline: article.str_or(&["headline"], ""),
                description: article.str_or(&["description"], ""),
                published: article.str_or(&["published"], ""),
                link: article.str_or(&["links", "web", "href"], ""),
            })
            .collect(),
    )
}

fn stat_value(stats: &[Value], name: &str) -> u32 {
    find_by(stats, "name", name)
        .map(|stat| stat.uint_or(&["value"], 0))
        .unwrap_or(0)
}

/// Parses `standings.groups` into division tables.
pub fn parse_standings(standings: &Value) -> Option<Vec<StandingsGroup>> {
    let groups = standings.list(&["groups"]);
    if groups.is_empty() {
        return None;
    }

    Some(
        groups
            .iter()
            .map(|group| StandingsGroup {
                header: group.str_or(&["header"], ""),
                entries: group
                    .list(&["standings", "entries"])
                    .iter()
                    .map(|entry| {
                        let stats = entry.list(&["stats"]);
                        StandingsEntry {
                            team: entry.str_or(&["team"], ""),
                            wins: stat_value(stats, "wins"),
                            losses: stat_value(stats, "losses"),
                            ties: stat_value(stats, "ties"),
                        }
                    })
                    .collect(),
            })
            .collect(),
    )
}
