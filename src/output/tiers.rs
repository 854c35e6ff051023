//! Detail tiers and the fields each of them keeps.
//!
//! A whitelist entry is a dotted path into the serialized game. When a path
//! crosses an array, the rest of the path applies to every element, so
//! `scoring_plays.text` keeps only the text of each scoring play.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named level of output detail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailTier {
    Minimal,
    #[default]
    Standard,
    Full,
}

const MINIMAL_TEAM_FIELDS: &[&str] = &[
    "away_team.abbreviation",
    "away_team.short_name",
    "away_team.record",
    "away_team.score",
    "home_team.abbreviation",
    "home_team.short_name",
    "home_team.record",
    "home_team.score",
];

const MINIMAL_FIELDS: &[&str] = &[
    "display_rank",
    "status",
    "start_time_utc",
    "start_time_local",
    "short_name",
    "scores.total",
    "clock",
    "period",
    "period_detail",
    "broadcasters.name",
    "odds.spread",
    "situation.down_distance_text",
    "situation.spot_text",
    "situation.possession.team",
    "situation.is_red_zone",
    "stats",
    "win_probability.home_win_percentage",
];

const STANDARD_FIELDS: &[&str] = &[
    "id",
    "display_rank",
    "status",
    "start_time_utc",
    "start_time_local",
    "name",
    "short_name",
    "season",
    "away_team",
    "home_team",
    "venue.name",
    "venue.city",
    "venue.state",
    "venue.indoor",
    "broadcasters",
    "scores",
    "odds",
    "weather",
    "clock",
    "period",
    "period_detail",
    "situation",
    "leaders",
    "stats",
    "player_stats",
    "scoring_plays.period",
    "scoring_plays.clock",
    "scoring_plays.team.abbreviation",
    "scoring_plays.type",
    "scoring_plays.text",
    "scoring_plays.away_score",
    "scoring_plays.home_score",
    "drives.previous.team",
    "drives.previous.description",
    "drives.previous.result",
    "drives.previous.is_score",
    "drives.current",
    "win_probability",
    "predictor",
    "attendance",
];

impl DetailTier {
    /// Next leaner tier, `None` below Minimal.
    pub fn lower(self) -> Option<DetailTier> {
        match self {
            DetailTier::Full => Some(DetailTier::Standard),
            DetailTier::Standard => Some(DetailTier::Minimal),
            DetailTier::Minimal => None,
        }
    }

    pub fn broadcaster_cap(self) -> usize {
        match self {
            DetailTier::Full => 5,
            DetailTier::Standard => 3,
            DetailTier::Minimal => 1,
        }
    }

    /// Dotted paths kept by this tier. `None` keeps every field.
    pub fn whitelist(self) -> Option<Vec<&'static str>> {
        match self {
            DetailTier::Full => None,
            DetailTier::Standard => Some(STANDARD_FIELDS.to_vec()),
            DetailTier::Minimal => Some(
                MINIMAL_TEAM_FIELDS
                    .iter()
                    .chain(MINIMAL_FIELDS)
                    .copied()
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for DetailTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetailTier::Minimal => "minimal",
            DetailTier::Standard => "standard",
            DetailTier::Full => "full",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowering_order() {
        assert_eq!(DetailTier::Full.lower(), Some(DetailTier::Standard));
        assert_eq!(DetailTier::Standard.lower(), Some(DetailTier::Minimal));
        assert_eq!(DetailTier::Minimal.lower(), None);
        assert!(DetailTier::Full > DetailTier::Minimal);
    }

    #[test]
    fn test_broadcaster_caps() {
        assert_eq!(DetailTier::Full.broadcaster_cap(), 5);
        assert_eq!(DetailTier::Standard.broadcaster_cap(), 3);
        assert_eq!(DetailTier::Minimal.broadcaster_cap(), 1);
    }

    #[test]
    fn test_whitelists() {
        assert!(DetailTier::Full.whitelist().is_none());
        let minimal = DetailTier::Minimal.whitelist().unwrap();
        let standard = DetailTier::Standard.whitelist().unwrap();
        assert!(minimal.contains(&"home_team.score"));
        assert!(minimal.contains(&"display_rank"));
        assert!(standard.contains(&"display_rank"));
        assert!(!minimal.contains(&"leaders"));
        assert!(standard.contains(&"leaders"));
    }

    #[test]
    fn test_minimal_keeps_no_ids_or_logos() {
        let minimal = DetailTier::Minimal.whitelist().unwrap();
        for path in &minimal {
            let leaf = path.rsplit('.').next().unwrap_or(path);
            assert!(
                !matches!(leaf, "id" | "logo" | "color"),
                "minimal tier keeps {path}"
            );
        }
        assert!(!minimal.contains(&"name"));
        assert!(!minimal.contains(&"home_team.name"));
        assert!(minimal.contains(&"away_team.abbreviation"));
        assert!(minimal.contains(&"away_team.record"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DetailTier::Full).unwrap(), "\"full\"");
        let tier: DetailTier = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(tier, DetailTier::Minimal);
        assert_eq!(DetailTier::Standard.to_string(), "standard");
        assert_eq!(DetailTier::default(), DetailTier::Standard);
    }
}
