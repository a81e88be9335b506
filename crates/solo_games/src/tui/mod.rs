//! Terminal UI for playing against the computer.

mod app;
mod celebration;
mod guard;
mod input;
mod observer;
mod scheduler;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::{Engine, RandomOpponent};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

pub use app::{App, Screen};
pub use celebration::{Celebration, Particle};
pub use guard::RestoreGuard;
pub use input::{digit_position, move_cursor};
pub use observer::ChannelObserver;
pub use scheduler::OpponentScheduler;
pub use ui::{draw, status_line};

/// Redraw and timer resolution.
const TICK: Duration = Duration::from_millis(50);

/// Builds the app from configuration, seeding both random sources.
pub fn build_app(config: &AppConfig, name: Option<String>) -> Result<App> {
    let (opponent, confetti_rng) = match config.seed() {
        Some(seed) => (
            RandomOpponent::seeded(*seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (RandomOpponent::from_entropy(), StdRng::from_os_rng()),
    };
    let celebration = Celebration::new(config.celebration().clone(), confetti_rng)?;
    let scheduler = OpponentScheduler::new(config.opponent_delay());

    let app = App::new(Engine::with_opponent(opponent), scheduler, celebration);
    Ok(match name {
        Some(name) => app.with_name(name),
        None => app,
    })
}

/// Runs the terminal game until the user quits.
pub async fn run_tui(config: AppConfig, name: Option<String>) -> Result<()> {
    // Log to a file so output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting solo games TUI");

    let mut app = build_app(&config, name)?;

    // Restored on every exit path, panics included
    let restore = RestoreGuard::new(guard::restore);
    guard::install_panic_hook();
    guard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_loop(&mut terminal, &mut app).await;
    drop(restore);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let scores = app.engine().scores();
    info!(
        player_wins = scores.player_wins(),
        opponent_wins = scores.opponent_wins(),
        draws = scores.draws(),
        "Session ended"
    );
    res
}

#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        tokio::select! {
            _ = ticker.tick() => app.tick(Instant::now()),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}
