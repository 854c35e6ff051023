use clap::Parser;
use eink_scoreboard::cli::Args;
use eink_scoreboard::config::Config;
use eink_scoreboard::data_fetcher::{ScoreboardClient, run};
use eink_scoreboard::error::AppError;
use eink_scoreboard::logging::setup_logging;
use eink_scoreboard::output::ShapeOptions;
use eink_scoreboard::ranking::RandomPicker;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return Config::display().await;
    }

    let mut config = Config::load().await?;
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(max_games) = args.max_games {
        config.max_games = max_games;
    }
    config.validate()?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are written to {log_file_path}");

    let client = ScoreboardClient::from_config(&config)?;
    let options = ShapeOptions::from_config(&config)?;
    let mut picker = RandomPicker::from_os_rng();

    run(&client, &options, &mut picker, &config).await?;

    Ok(())
}
