use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::Broadcaster;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Display logos for broadcast networks. ESPN does not ship usable ones.
static NETWORK_LOGOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "ESPN",
            "https://upload.wikimedia.org/wikipedia/commons/2/2f/ESPN_wordmark.svg",
        ),
        (
            "NBC",
            "https://upload.wikimedia.org/wikipedia/commons/d/d3/NBCUniversal_Peacock_Logo.svg",
        ),
        (
            "FOX",
            "https://upload.wikimedia.org/wikipedia/commons/c/c0/Fox_Broadcasting_Company_logo_%282019%29.svg",
        ),
        (
            "CBS",
            "https://upload.wikimedia.org/wikipedia/commons/a/a5/Paramount_Plus.svg",
        ),
        (
            "ABC",
            "https://upload.wikimedia.org/wikipedia/commons/2/2f/ABC-2021-LOGO.svg",
        ),
        (
            "Prime Video",
            "https://upload.wikimedia.org/wikipedia/commons/9/90/Prime_Video_logo_%282024%29.svg",
        ),
        (
            "Amazon",
            "https://upload.wikimedia.org/wikipedia/commons/9/90/Prime_Video_logo_%282024%29.svg",
        ),
        (
            "NFL Network",
            "https://upload.wikimedia.org/wikipedia/en/7/7a/NFL_Network_logo.svg",
        ),
        (
            "Peacock",
            "https://upload.wikimedia.org/wikipedia/commons/d/d3/NBCUniversal_Peacock_Logo.svg",
        ),
    ])
});

/// Team logo CDN pattern used when a competitor record carries no logo.
const TEAM_LOGO_PATTERN: &str = "https://a.espncdn.com/i/teamlogos/nfl/500/{abbr}.png";

/// Logo URL for a broadcast network, empty when the network is unmapped.
pub fn network_logo(name: &str) -> &'static str {
    NETWORK_LOGOS.get(name).copied().unwrap_or("")
}

/// Team logo built from the CDN pattern, empty without an abbreviation.
pub fn fallback_team_logo(abbreviation: &str) -> String {
    if abbreviation.is_empty() {
        String::new()
    } else {
        TEAM_LOGO_PATTERN.replace("{abbr}", &abbreviation.to_ascii_lowercase())
    }
}

/// Extracts broadcasters from a competition record.
///
/// Reads `geoBroadcasts[].media.shortName`, falling back to the plain
/// `broadcasts[].names[]` list when no geo entries exist. Names are
/// de-duplicated in first-seen order.
pub fn parse_broadcasters(competition: &Value) -> Vec<Broadcaster> {
    let mut seen = HashSet::new();
    let mut broadcasters = Vec::new();

    let mut push = |name: String, kind: String| {
        if !name.is_empty() && seen.insert(name.clone()) {
            broadcasters.push(Broadcaster {
                logo: network_logo(&name).to_string(),
                name,
                kind,
            });
        }
    };

    let geo = competition.list(&["geoBroadcasts"]);
    if !geo.is_empty() {
        for entry in geo {
            push(
                entry.str_or(&["media", "shortName"], ""),
                entry.str_or(&["type", "shortName"], "TV"),
            );
        }
    } else {
        for entry in competition.list(&["broadcasts"]) {
            for name in entry.list(&["names"]) {
                push(name.as_str().unwrap_or_default().to_string(), "TV".to_string());
            }
        }
    }

    broadcasters
}
