//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers used by the fetch, ranking
//! and shaping pipeline so they can be tuned in one place.

/// Default ESPN site API base for NFL data
pub const DEFAULT_API_BASE_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("eink_scoreboard/", env!("CARGO_PKG_VERSION"));

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "eink_scoreboard";

/// Default log file name
pub const LOG_FILE_NAME: &str = "eink_scoreboard.log";

/// IANA zone used for `start_time_local`
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Los_Angeles";

/// Output document defaults
pub mod output {
    /// Default path of the minified document
    pub const DEFAULT_OUTPUT_PATH: &str = "docs/nfl_games.json";

    /// Number of games emitted into the document
    pub const DEFAULT_MAX_GAMES: usize = 4;

    /// Byte ceiling for the minified document
    pub const DEFAULT_BYTE_BUDGET: usize = 48 * 1024;

    /// Suffix inserted before the extension of the pretty-printed copy
    pub const PRETTY_SUFFIX: &str = "pretty";
}

/// Enrichment limits
pub mod enrichment {
    /// Completed drives kept by size-constrained tiers
    pub const DEFAULT_DRIVE_LIMIT: usize = 2;

    /// Win probability points kept by the standard tier
    pub const STANDARD_WIN_PROBABILITY_POINTS: usize = 12;

    /// Athletes kept per player statistic category by the standard tier
    pub const STANDARD_ATHLETES_PER_CATEGORY: usize = 1;
}

/// Regular time periods before overtime starts
pub const REGULATION_PERIODS: usize = 4;

/// ESPN season type code for the postseason
pub const POSTSEASON_TYPE: i64 = 3;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "SCOREBOARD_API_BASE_URL";

    /// Environment variable for the static API credential
    pub const API_KEY: &str = "SCOREBOARD_API_KEY";

    /// Environment variable for output path override
    pub const OUTPUT_PATH: &str = "SCOREBOARD_OUTPUT_PATH";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SCOREBOARD_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SCOREBOARD_HTTP_TIMEOUT";

    /// Environment variable for byte budget override
    pub const BYTE_BUDGET: &str = "SCOREBOARD_BYTE_BUDGET";
}
