//! Integration tests for the terminal app state machine.

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use solo_games::tui::{App, Celebration, OpponentScheduler, Screen};
use solo_games::{AppConfig, CelebrationSettings, build_app};
use solo_tictactoe::{Cell, Engine, Mark, Party, Position, ScriptedOpponent, Status};

const DELAY: Duration = Duration::from_millis(100);

fn app(script: impl IntoIterator<Item = usize>) -> App {
    App::new(
        Engine::with_opponent(ScriptedOpponent::new(script)),
        OpponentScheduler::new(DELAY),
        Celebration::seeded(CelebrationSettings::default(), 7).unwrap(),
    )
}

fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_key(KeyEvent::from(code), now);
}

fn type_name(app: &mut App, name: &str, now: Instant) {
    for c in name.chars() {
        press(app, KeyCode::Char(c), now);
    }
    press(app, KeyCode::Enter, now);
}

#[test]
fn test_empty_name_shows_popup_until_dismissed() {
    let now = Instant::now();
    let mut app = app([]);

    type_name(&mut app, "   ", now);
    assert_eq!(app.popup(), Some("Please enter your name first!"));
    assert_eq!(app.screen(), Screen::Setup);
    assert!(app.engine().session().is_none());

    press(&mut app, KeyCode::Char('x'), now);
    assert_eq!(app.popup(), None);
    assert_eq!(app.name_input(), "   ", "dismissing key is not typed");
}

#[test]
fn test_name_entry_starts_game() {
    let now = Instant::now();
    let mut app = app([]);

    press(&mut app, KeyCode::Tab, now);
    assert_eq!(app.symbol_choice(), Mark::O);
    type_name(&mut app, "Ava", now);

    assert_eq!(app.screen(), Screen::Playing);
    let session = app.engine().session().unwrap();
    assert_eq!(session.player_name(), "Ava");
    assert_eq!(session.player_symbol(), Mark::O);
    assert_eq!(session.active_turn(), Party::Player);
}

#[test]
fn test_computer_replies_after_delay() {
    let t0 = Instant::now();
    let mut app = app([4]);
    type_name(&mut app, "Ava", t0);

    press(&mut app, KeyCode::Char('1'), t0);
    assert_eq!(app.engine().board().get(Position::TopLeft), Cell::Marked(Mark::X));
    assert!(app.opponent_pending());

    app.tick(t0 + DELAY / 2);
    assert!(app.opponent_pending());
    assert!(app.engine().board().is_empty(Position::Center));

    app.tick(t0 + DELAY);
    assert!(!app.opponent_pending());
    assert_eq!(app.engine().board().get(Position::Center), Cell::Marked(Mark::O));
    assert!(app.last_move().unwrap().starts_with("Computer played"));
    assert_eq!(app.engine().session().unwrap().active_turn(), Party::Player);
}

#[test]
fn test_keys_ignored_while_computer_thinks() {
    let t0 = Instant::now();
    let mut app = app([4]);
    type_name(&mut app, "Ava", t0);

    press(&mut app, KeyCode::Char('1'), t0);
    press(&mut app, KeyCode::Char('2'), t0);
    assert!(app.engine().board().is_empty(Position::TopCenter));
}

#[test]
fn test_win_celebrates_and_reset_clears() {
    let t0 = Instant::now();
    let mut app = app([3, 4]);
    type_name(&mut app, "Ava", t0);

    press(&mut app, KeyCode::Char('1'), t0);
    app.tick(t0 + DELAY);
    press(&mut app, KeyCode::Char('2'), t0 + DELAY);
    app.tick(t0 + DELAY * 2);
    press(&mut app, KeyCode::Char('3'), t0 + DELAY * 2);

    let session = app.engine().session().unwrap();
    assert_eq!(session.status(), Status::Won(Party::Player));
    assert!(app.celebration().is_active());
    assert!(!app.opponent_pending());
    assert_eq!(app.engine().scores().player_wins(), 1);

    press(&mut app, KeyCode::Char('r'), t0 + DELAY * 2);
    assert!(!app.celebration().is_active());
    assert!(app.last_move().is_none());
    assert!(app.engine().board().empty_positions().len() == 9);
    assert_eq!(app.engine().session().unwrap().status(), Status::InProgress);
    assert_eq!(app.engine().scores().player_wins(), 1);
}

#[test]
fn test_reset_before_reply_leaves_stale_trigger_harmless() {
    let t0 = Instant::now();
    let mut app = app([4]);
    type_name(&mut app, "Ava", t0);

    press(&mut app, KeyCode::Char('1'), t0);
    press(&mut app, KeyCode::Char('r'), t0);
    app.tick(t0 + DELAY);

    assert_eq!(app.engine().board().empty_positions().len(), 9);
    assert_eq!(app.engine().session().unwrap().active_turn(), Party::Player);
    assert!(app.last_move().is_none());
}

#[test]
fn test_cursor_moves_and_places() {
    let t0 = Instant::now();
    let mut app = app([0]);
    type_name(&mut app, "Ava", t0);
    assert_eq!(app.cursor(), Position::Center);

    press(&mut app, KeyCode::Up, t0);
    press(&mut app, KeyCode::Right, t0);
    assert_eq!(app.cursor(), Position::TopRight);

    press(&mut app, KeyCode::Enter, t0);
    assert_eq!(app.engine().board().get(Position::TopRight), Cell::Marked(Mark::X));
}

#[test]
fn test_quit_keys() {
    let now = Instant::now();
    let mut app = app([]);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
    assert!(app.should_quit());

    let mut app = self::app([]);
    type_name(&mut app, "Ava", now);
    press(&mut app, KeyCode::Char('q'), now);
    assert!(app.should_quit());
}

#[test]
fn test_build_app_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent_delay_ms = 0\nseed = 11\n\n[celebration]\nparticle_count = 3").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.opponent_delay_ms(), 0);

    let t0 = Instant::now();
    let mut app = build_app(&config, Some("Ava".to_string())).unwrap();
    press(&mut app, KeyCode::Enter, t0);
    assert_eq!(app.screen(), Screen::Playing);

    press(&mut app, KeyCode::Char('5'), t0);
    app.tick(t0);
    assert_eq!(app.engine().board().empty_positions().len(), 7);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AppConfig::from_file(dir.path().join("absent.toml")).is_err());
}
