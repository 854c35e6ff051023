use crate::data_fetcher::fields::Fields;
use crate::data_fetcher::models::GameStatus;
use serde_json::Value;

/// Clock state of a game as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub clock: String,
    pub period: u32,
    pub period_detail: String,
}

/// Status block of an event: the competition's own status when present,
/// otherwise the event-level one.
fn status_block(event: &Value) -> Option<&Value> {
    event
        .section(&["competitions", "0", "status"])
        .or_else(|| event.section(&["status"]))
}

/// Determines the status of an event from its `status.type.state` code.
///
/// A missing or unrecognized state code maps to [`GameStatus::Unknown`], which
/// ranks below every known status.
///
/// # Examples
///
/// ```rust
/// use eink_scoreboard::data_fetcher::models::GameStatus;
/// use eink_scoreboard::data_fetcher::processors::determine_game_status;
/// use serde_json::json;
///
/// let event = json!({"competitions": [{"status": {"type": {"state": "in"}}}]});
/// assert_eq!(determine_game_status(&event), GameStatus::InProgress);
/// ```
pub fn determine_game_status(event: &Value) -> GameStatus {
    let state = status_block(event)
        .map(|status| status.str_or(&["type", "state"], ""))
        .unwrap_or_default();

    let status = GameStatus::from_state_code(&state);
    if status == GameStatus::Unknown {
        tracing::debug!(
            "Event {} has unrecognized state code '{}'",
            event.str_or(&["id"], "?"),
            state
        );
    }
    status
}

/// Extracts clock, period and the short status text ("Q3 4:12", "Final").
pub fn parse_clock(event: &Value) -> ClockState {
    match status_block(event) {
        Some(status) => ClockState {
            clock: status.str_or(&["displayClock"], "0:00"),
            period: status.uint_or(&["period"], 0),
            period_detail: status.str_or(&["type", "shortDetail"], ""),
        },
        None => ClockState {
            clock: "0:00".to_string(),
            period: 0,
            period_detail: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_competition() {
        let event = json!({"competitions": [{"status": {"type": {"state": "post"}}}]});
        assert_eq!(determine_game_status(&event), GameStatus::Final);
    }

    #[test]
    fn test_status_falls_back_to_event_level() {
        let event = json!({"status": {"type": {"state": "pre"}}, "competitions": [{}]});
        assert_eq!(determine_game_status(&event), GameStatus::Scheduled);
    }

    #[test]
    fn test_missing_or_unrecognized_state_is_unknown() {
        assert_eq!(determine_game_status(&json!({})), GameStatus::Unknown);
        let event = json!({"competitions": [{"status": {"type": {"state": "delayed"}}}]});
        assert_eq!(determine_game_status(&event), GameStatus::Unknown);
    }

    #[test]
    fn test_parse_clock() {
        let event = json!({"competitions": [{"status": {
            "displayClock": "4:12",
            "period": 3,
            "type": {"state": "in", "shortDetail": "4:12 - 3rd"}
        }}]});
        let clock = parse_clock(&event);
        assert_eq!(clock.clock, "4:12");
        assert_eq!(clock.period, 3);
        assert_eq!(clock.period_detail, "4:12 - 3rd");
    }

    #[test]
    fn test_parse_clock_defaults() {
        let clock = parse_clock(&json!({"competitions": []}));
        assert_eq!(clock.clock, "0:00");
        assert_eq!(clock.period, 0);
        assert!(clock.period_detail.is_empty());
    }
}
