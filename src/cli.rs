use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// E-ink scoreboard feed builder
///
/// Fetches the current NFL scoreboard, picks a featured game, enriches it
/// with its detailed summary and writes a compact JSON document sized for
/// a low-bandwidth e-ink dashboard.
///
/// Running without flags performs one fetch-and-write pass and exits.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the document to this path instead of the configured one.
    /// The pretty-printed copy, when enabled, is written next to it.
    #[arg(long = "output", short = 'o', help_heading = "Output", value_name = "PATH")]
    pub output: Option<String>,

    /// Number of ranked games to include in the document.
    #[arg(long = "max-games", short = 'n', help_heading = "Output", value_name = "N")]
    pub max_games: Option<usize>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug-level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log only to the log file, not to stdout.
    #[arg(long = "quiet", short = 'q', help_heading = "Debug")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
