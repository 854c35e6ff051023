pub mod box_score;
pub mod broadcasters;
pub mod drives;
pub mod enrichment;
pub mod game_info;
pub mod game_status;
pub mod leaders;
pub mod normalizer;
pub mod predictions;
pub mod situation;
pub mod time_formatting;

pub use enrichment::{EnrichmentPolicy, Keep, StatDetail, enrich_game};
pub use game_status::{ClockState, determine_game_status, parse_clock};
pub use normalizer::{parse_events, parse_game, parse_season};
pub use situation::{parse_scoreboard_situation, parse_summary_situation};
pub use time_formatting::{format_display_time, parse_display_timezone, parse_upstream_utc};
