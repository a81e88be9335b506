//! Solo Games - tic-tac-toe against a random computer in the terminal.
//!
//! The rules, scoring and opponent live in [`solo_tictactoe`]; this crate
//! wraps them in a ratatui front end with a delayed computer reply and a
//! confetti burst on wins, plus a headless [`autoplay`] mode.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod autoplay;
pub mod cli;
pub mod config;
pub mod tui;

pub use autoplay::autoplay;
pub use cli::{Cli, Command};
pub use config::{AppConfig, CelebrationSettings, ConfigError, DEFAULT_CONFIG_FILE};
pub use tui::{App, Screen, build_app, run_tui};
