//! Tiered, size-budgeted shaping of ranked games into the output document.

use super::tiers::DetailTier;
use crate::config::Config;
use crate::data_fetcher::models::{Game, SeasonInfo};
use crate::data_fetcher::processors::{EnrichmentPolicy, enrich_game, parse_display_timezone};
use crate::error::AppError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Document written for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub fetched_at: String,
    pub season: SeasonInfo,
    pub games: Vec<Value>,
}

impl OutputDocument {
    /// Size of the minified serialization in bytes.
    pub fn minified_len(&self) -> Result<usize, AppError> {
        Ok(serde_json::to_vec(self)?.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeOptions {
    pub max_games: usize,
    pub byte_budget: usize,
    pub featured_tier: DetailTier,
    pub secondary_tier: DetailTier,
    pub drive_limit: usize,
    /// Zone `start_time_local` is rendered in.
    pub display_timezone: Tz,
}

impl ShapeOptions {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            max_games: config.max_games,
            byte_budget: config.byte_budget,
            featured_tier: config.featured_tier,
            secondary_tier: config.secondary_tier,
            drive_limit: config.drive_limit,
            display_timezone: parse_display_timezone(&config.display_timezone)?,
        })
    }
}

/// Result of fitting a document into the byte budget.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedDocument {
    pub document: OutputDocument,
    /// Tier the featured game ended up with.
    pub featured_tier: DetailTier,
    pub size: usize,
    pub within_budget: bool,
}

/// Copies the value found at `path` in `source` into `target`, creating
/// intermediate objects as needed. Arrays are walked element-wise. Absent
/// keys are skipped; `null` values are kept.
fn copy_path(source: &Value, target: &mut Value, path: &[&str]) {
    let Some((head, rest)) = path.split_first() else {
        *target = source.clone();
        return;
    };

    match source {
        Value::Object(fields) => {
            let Some(child) = fields.get(*head) else {
                return;
            };
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(out) = target {
                let slot = out.entry(head.to_string()).or_insert(Value::Null);
                if child.is_null() {
                    *slot = Value::Null;
                } else {
                    copy_path(child, slot, rest);
                }
            }
        }
        Value::Array(items) => {
            if !matches!(target, Value::Array(existing) if existing.len() == items.len()) {
                *target = Value::Array(vec![Value::Null; items.len()]);
            }
            if let Value::Array(out) = target {
                for (item, slot) in items.iter().zip(out.iter_mut()) {
                    copy_path(item, slot, path);
                }
            }
        }
        scalar => *target = scalar.clone(),
    }
}

/// Keeps only the whitelisted paths of `source`.
pub fn project(source: &Value, whitelist: &[&str]) -> Value {
    let mut target = Value::Object(Map::new());
    for entry in whitelist {
        let path: Vec<&str> = entry.split('.').collect();
        copy_path(source, &mut target, &path);
    }
    target
}

/// Serializes one game at the given tier.
pub fn shape_game(game: &Game, tier: DetailTier) -> Result<Value, AppError> {
    let mut capped = game.clone();
    capped.broadcasters.truncate(tier.broadcaster_cap());
    let full = serde_json::to_value(&capped)?;

    Ok(match tier.whitelist() {
        Some(whitelist) => project(&full, &whitelist),
        None => full,
    })
}

/// Builds the document from ranked games: the first `max_games`, the
/// rank 1 game at `featured_tier` and the rest at `secondary_tier`.
pub fn shape_document(
    games: &[Game],
    season: &SeasonInfo,
    fetched_at: &str,
    options: &ShapeOptions,
) -> Result<OutputDocument, AppError> {
    let games = games
        .iter()
        .take(options.max_games)
        .map(|game| {
            let tier = if game.display_rank == 1 {
                options.featured_tier
            } else {
                options.secondary_tier
            };
            shape_game(game, tier)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OutputDocument {
        fetched_at: fetched_at.to_string(),
        season: SeasonInfo {
            type_name: None,
            ..season.clone()
        },
        games,
    })
}

/// Enriches the featured game and shapes the document, stepping the
/// featured tier down until the minified document fits `byte_budget`.
///
/// Each attempt enriches a fresh copy of the ranked games with the policy
/// of the tier being tried. When even the leanest tier is too large, the
/// leanest document is returned with `within_budget` unset.
pub fn fit_to_budget(
    ranked: &[Game],
    summary: Option<&Value>,
    season: &SeasonInfo,
    fetched_at: &str,
    options: &ShapeOptions,
) -> Result<FittedDocument, AppError> {
    let mut tier = options.featured_tier;

    loop {
        let mut games = ranked.to_vec();
        if let Some(featured) = games.first_mut() {
            let policy = EnrichmentPolicy::for_tier(tier, options.drive_limit);
            enrich_game(featured, summary, &policy);
        }

        let tier_options = ShapeOptions {
            featured_tier: tier,
            ..*options
        };
        let document = shape_document(&games, season, fetched_at, &tier_options)?;
        let size = document.minified_len()?;

        if size <= options.byte_budget {
            debug!("Document fits at featured tier {tier}: {size} bytes");
            return Ok(FittedDocument {
                document,
                featured_tier: tier,
                size,
                within_budget: true,
            });
        }

        match tier.lower() {
            Some(next) => {
                debug!("Document is {size} bytes at tier {tier}, trying {next}");
                tier = next;
            }
            None => {
                warn!(
                    "Document is {size} bytes, over the {} byte budget even at tier {tier}",
                    options.byte_budget
                );
                return Ok(FittedDocument {
                    document,
                    featured_tier: tier,
                    size,
                    within_budget: false,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Broadcaster, GameStatus};
    use crate::testing_utils::{summary_json, team};
    use serde_json::json;

    fn options() -> ShapeOptions {
        ShapeOptions {
            max_games: 4,
            byte_budget: 1024 * 1024,
            featured_tier: DetailTier::Standard,
            secondary_tier: DetailTier::Minimal,
            drive_limit: 2,
            display_timezone: chrono_tz::America::Los_Angeles,
        }
    }

    fn ranked_games(count: u32) -> Vec<Game> {
        (1..=count)
            .map(|rank| Game {
                id: format!("40{rank}"),
                display_rank: rank,
                status: if rank == 1 {
                    GameStatus::InProgress
                } else {
                    GameStatus::Scheduled
                },
                name: format!("Game {rank}"),
                home_team: team("12", "KC"),
                away_team: team("2", "BUF"),
                broadcasters: ["CBS", "Paramount+", "NFL Network", "ESPN", "ABC", "FOX"]
                    .iter()
                    .map(|name| Broadcaster {
                        name: name.to_string(),
                        kind: "TV".to_string(),
                        logo: String::new(),
                    })
                    .collect(),
                ..Game::default()
            })
            .collect()
    }

    fn season() -> SeasonInfo {
        SeasonInfo {
            year: 2024,
            season_type: 2,
            type_name: Some("Regular Season".to_string()),
            week: 11,
        }
    }

    #[test]
    fn test_project_walks_arrays_and_keeps_nulls() {
        let source = json!({
            "a": {"b": 1, "c": 2},
            "list": [{"x": 1, "y": 2}, {"x": 3, "y": 4}],
            "gone": null
        });
        let projected = project(&source, &["a.b", "list.x", "gone.deep", "missing.path"]);
        assert_eq!(
            projected,
            json!({"a": {"b": 1}, "list": [{"x": 1}, {"x": 3}], "gone": null})
        );
    }

    #[test]
    fn test_shape_game_applies_caps_and_whitelist() {
        let game = &ranked_games(1)[0];

        let full = shape_game(game, DetailTier::Full).unwrap();
        assert_eq!(full["broadcasters"].as_array().unwrap().len(), 5);
        assert!(full.get("venue").is_some());

        let standard = shape_game(game, DetailTier::Standard).unwrap();
        assert_eq!(standard["broadcasters"].as_array().unwrap().len(), 3);
        assert!(standard.get("leaders").is_some());

        let minimal = shape_game(game, DetailTier::Minimal).unwrap();
        assert_eq!(minimal["broadcasters"], json!([{"name": "CBS"}]));
        assert!(minimal.get("venue").is_none());
        assert!(minimal.get("name").is_none());
        assert_eq!(minimal["home_team"]["abbreviation"], "KC");
        assert!(minimal["home_team"].get("color").is_none());
        assert!(minimal["situation"].is_null());
    }

    #[test]
    fn test_minimal_game_has_no_ids_or_logos() {
        let mut game = ranked_games(2).remove(1);
        game.home_team.logo = "https://a.espncdn.com/i/teamlogos/nfl/500/kc.png".to_string();
        game.home_team.record = "9-1".to_string();

        let minimal = shape_game(&game, DetailTier::Minimal).unwrap();
        assert!(minimal.get("id").is_none());
        for side in ["home_team", "away_team"] {
            let team = minimal[side].as_object().unwrap();
            assert!(!team.contains_key("id"), "{side} kept id");
            assert!(!team.contains_key("logo"), "{side} kept logo");
            assert!(!team.contains_key("name"), "{side} kept full name");
        }
        assert_eq!(minimal["home_team"]["record"], "9-1");
        assert_eq!(minimal["display_rank"], 2);

        let standard = shape_game(&game, DetailTier::Standard).unwrap();
        assert_eq!(standard["id"], "402");
        assert_eq!(standard["home_team"]["id"], "12");
        assert!(standard["home_team"].get("logo").is_some());
    }

    #[test]
    fn test_shape_document_limits_games_and_tiers() {
        let games = ranked_games(6);
        let document =
            shape_document(&games, &season(), "2024-11-17T20:00:00Z", &options()).unwrap();

        assert_eq!(document.games.len(), 4);
        assert_eq!(document.games[0]["display_rank"], 1);
        assert!(document.games[0].get("name").is_some());
        assert!(document.games[1].get("name").is_none());

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["season"], json!({"year": 2024, "type": 2, "week": 11}));
    }

    #[test]
    fn test_fit_to_budget_keeps_configured_tier_when_it_fits() {
        let games = ranked_games(3);
        let fitted =
            fit_to_budget(&games, Some(&summary_json()), &season(), "now", &options()).unwrap();

        assert!(fitted.within_budget);
        assert_eq!(fitted.featured_tier, DetailTier::Standard);
        assert!(fitted.document.games[0].get("stats").is_some());
        assert!(fitted.document.games[1].get("stats").is_none());
        assert_eq!(fitted.size, fitted.document.minified_len().unwrap());
    }

    #[test]
    fn test_fit_to_budget_steps_down() {
        let games = ranked_games(2);
        let summary = summary_json();
        let mut opts = options();
        opts.featured_tier = DetailTier::Full;

        let full = fit_to_budget(&games, Some(&summary), &season(), "now", &opts).unwrap();
        let minimal_opts = ShapeOptions {
            featured_tier: DetailTier::Minimal,
            ..opts
        };
        let minimal =
            fit_to_budget(&games, Some(&summary), &season(), "now", &minimal_opts).unwrap();
        assert!(minimal.size < full.size);

        opts.byte_budget = full.size - 1;
        let fitted = fit_to_budget(&games, Some(&summary), &season(), "now", &opts).unwrap();
        assert!(fitted.within_budget);
        assert!(fitted.featured_tier < DetailTier::Full);
        assert!(fitted.size <= opts.byte_budget);
    }

    #[test]
    fn test_fit_to_budget_emits_smallest_when_nothing_fits() {
        let games = ranked_games(2);
        let mut opts = options();
        opts.byte_budget = 10;

        let fitted =
            fit_to_budget(&games, Some(&summary_json()), &season(), "now", &opts).unwrap();
        assert!(!fitted.within_budget);
        assert_eq!(fitted.featured_tier, DetailTier::Minimal);
        assert_eq!(fitted.document.games.len(), 2);
    }

    #[test]
    fn test_fit_to_budget_without_games() {
        let fitted = fit_to_budget(&[], None, &season(), "now", &options()).unwrap();
        assert!(fitted.document.games.is_empty());
        assert!(fitted.within_budget);
    }
}
