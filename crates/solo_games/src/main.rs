//! Solo Games - command line entry point.

use anyhow::Result;
use clap::Parser;
use solo_games::{AppConfig, Cli, Command, autoplay, run_tui};
use solo_tictactoe::Mark;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            name,
            seed,
            delay_ms,
        } => run_play(config, name, seed, delay_ms).await,
        Command::Autoplay {
            games,
            seed,
            symbol,
        } => run_autoplay(games, seed, symbol),
    }
}

/// Run the terminal game
async fn run_play(
    config: Option<std::path::PathBuf>,
    name: Option<String>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = AppConfig::load(config.as_deref())?;
    if let Some(seed) = seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_opponent_delay_ms(delay_ms);
    }

    run_tui(config, name).await
}

/// Play headless games and print the tally
fn run_autoplay(games: u32, seed: u64, symbol: Mark) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(games, seed, %symbol, "Starting autoplay");
    let scores = autoplay(games, seed, symbol)?;
    println!("{}", serde_json::to_string(&scores)?);
    Ok(())
}
