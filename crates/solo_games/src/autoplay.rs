//! Headless games with random moves on both sides.

use solo_tictactoe::{Engine, Mark, Opponent, RandomOpponent, ScoreBoard};
use tracing::{debug, info, instrument};

/// Name given to the simulated player.
const AUTOPLAY_NAME: &str = "Autoplay";

/// Plays `games` complete games and returns the final tally.
///
/// The simulated player picks random empty cells just like the computer,
/// using its own stream derived from `seed`. The session is reset between
/// games, so the tally accumulates exactly as it would in the UI.
#[instrument]
pub fn autoplay(games: u32, seed: u64, symbol: Mark) -> anyhow::Result<ScoreBoard> {
    let mut engine = Engine::with_opponent(RandomOpponent::seeded(seed));
    let mut player = RandomOpponent::seeded(seed.wrapping_add(1));
    engine.start_session(AUTOPLAY_NAME, symbol)?;

    for game in 0..games {
        loop {
            let open = engine.board().empty_positions();
            let Some(pick) = player.choose(&open) else {
                anyhow::bail!("No open cell for the player in game {}", game);
            };
            if engine.player_move(pick).is_terminal() {
                break;
            }
            let Some(reply) = engine.opponent_move() else {
                anyhow::bail!("Computer failed to move in game {}", game);
            };
            if reply.outcome().is_terminal() {
                break;
            }
        }
        debug!(game, status = ?engine.session().map(|s| s.status()), "Game finished");
        engine.reset_session();
    }

    let scores = engine.scores();
    info!(
        player_wins = scores.player_wins(),
        opponent_wins = scores.opponent_wins(),
        draws = scores.draws(),
        "Autoplay complete"
    );
    Ok(scores)
}
