//! Command-line interface for solo_games.

use clap::{Parser, Subcommand};
use solo_tictactoe::Mark;

/// Solo Games - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "solo_games")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to ./solo_games.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Prefill the name field
        #[arg(long)]
        name: Option<String>,

        /// Seed the computer opponent for a repeatable game
        #[arg(long)]
        seed: Option<u64>,

        /// Override the computer's thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play headless games with random moves on both sides and print the tally as JSON
    Autoplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both sides
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Mark played by the simulated player
        #[arg(long, default_value = "X")]
        symbol: Mark,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from(["solo_games", "play", "--name", "Ava", "--delay-ms", "0"]).unwrap();
        match cli.command {
            Command::Play { name, delay_ms, seed, config } => {
                assert_eq!(name.as_deref(), Some("Ava"));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(seed, None);
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_autoplay_defaults() {
        let cli = Cli::try_parse_from(["solo_games", "autoplay", "--symbol", "O"]).unwrap();
        match cli.command {
            Command::Autoplay { games, seed, symbol } => {
                assert_eq!(games, 100);
                assert_eq!(seed, 0);
                assert_eq!(symbol, Mark::O);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_autoplay_rejects_unknown_symbol() {
        assert!(Cli::try_parse_from(["solo_games", "autoplay", "--symbol", "Z"]).is_err());
    }
}
