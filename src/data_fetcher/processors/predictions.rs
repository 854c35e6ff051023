use super::enrichment::Keep;
use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::{Predictor, TeamProjection, WinProbabilityPoint};
use serde_json::Value;

/// Parses the summary `winprobability` series, trimmed by `keep`.
pub fn parse_win_probability(series: &[Value], keep: Keep) -> Option<Vec<WinProbabilityPoint>> {
    if series.is_empty() {
        return None;
    }

    let points = series
        .iter()
        .map(|point| WinProbabilityPoint {
            play_id: point.str_or(&["playId"], ""),
            home_win_percentage: point.float_or(&["homeWinPercentage"], 0.0),
            tie_percentage: point.float_or(&["tiePercentage"], 0.0),
        })
        .collect();
    Some(keep.apply(points))
}

fn parse_projection(team: &Value) -> TeamProjection {
    TeamProjection {
        id: team.str_or(&["id"], ""),
        game_projection: team.float_or(&["gameProjection"], 0.0),
        team_chance_loss: team.float_or(&["teamChanceLoss"], 0.0),
    }
}

/// Parses the ESPN matchup predictor block.
pub fn parse_predictor(predictor: &Value) -> Option<Predictor> {
    let predictor = predictor.section(&[])?;
    Some(Predictor {
        header: predictor.str_or(&["header"], ""),
        home: predictor.at(&["homeTeam"]).map(parse_projection).unwrap_or_default(),
        away: predictor.at(&["awayTeam"]).map(parse_projection).unwrap_or_default(),
    })
}
