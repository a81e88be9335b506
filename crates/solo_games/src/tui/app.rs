//! Application state and key handling.
//!
//! The app forwards user intent to the [`Engine`] and reacts to the events
//! the engine publishes: it schedules the computer's reply after a
//! `Continued` player move and launches confetti when the player wins.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use solo_tictactoe::{Engine, EngineEvent, Mark, MoveOutcome, Party, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::celebration::Celebration;
use super::input::{digit_position, move_cursor};
use super::observer::ChannelObserver;
use super::scheduler::OpponentScheduler;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Name entry and mark choice.
    Setup,
    /// The board.
    Playing,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    events: mpsc::UnboundedReceiver<EngineEvent>,
    scheduler: OpponentScheduler,
    celebration: Celebration,
    screen: Screen,
    name_input: String,
    symbol_choice: Mark,
    cursor: Position,
    popup: Option<String>,
    last_move: Option<String>,
    should_quit: bool,
}

impl App {
    /// Wires the app to an engine. The engine must not have a session yet.
    pub fn new(mut engine: Engine, scheduler: OpponentScheduler, celebration: Celebration) -> Self {
        let (observer, events) = ChannelObserver::channel();
        engine.subscribe(observer);
        Self {
            engine,
            events,
            scheduler,
            celebration,
            screen: Screen::Setup,
            name_input: String::new(),
            symbol_choice: Mark::X,
            cursor: Position::Center,
            popup: None,
            last_move: None,
            should_quit: false,
        }
    }

    /// Prefills the name field.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_input = name.into();
        self
    }

    /// The engine being played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text typed into the name field.
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Mark selected on the setup screen.
    pub fn symbol_choice(&self) -> Mark {
        self.symbol_choice
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Blocking message, if one is showing.
    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    /// Description of the computer's latest move.
    pub fn last_move(&self) -> Option<&str> {
        self.last_move.as_deref()
    }

    /// Confetti state.
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// Whether the computer's reply is pending.
    pub fn opponent_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self, key, now), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.popup.take().is_some() {
            debug!("Popup dismissed");
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key.code),
            Screen::Playing => self.handle_game_key(key.code),
        }
        self.drain_events(now);
    }

    /// Advances timers: fires a due computer move and animates confetti.
    pub fn tick(&mut self, now: Instant) {
        if self.scheduler.take_due(now) {
            match self.engine.opponent_move() {
                Some(reply) => {
                    self.last_move = Some(format!("Computer played {}", reply.position()));
                }
                None => debug!("Stale opponent trigger ignored"),
            }
        }
        self.drain_events(now);
        self.celebration.tick();
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_session(),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.symbol_choice = self.symbol_choice.opponent();
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) => self.name_input.push(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.engine.reset_session(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.place_at(pos);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    fn start_session(&mut self) {
        match self.engine.start_session(&self.name_input, self.symbol_choice) {
            Ok(session) => {
                info!(player = %session.player_name(), symbol = %session.player_symbol(), "Game started");
                self.screen = Screen::Playing;
                self.cursor = Position::Center;
            }
            Err(e) => self.popup = Some(e.to_string()),
        }
    }

    fn place_at(&mut self, pos: Position) {
        if let MoveOutcome::Rejected(reason) = self.engine.player_move(pos) {
            debug!(%reason, "Ignoring click");
        }
    }

    fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                EngineEvent::MoveApplied {
                    party: Party::Player,
                    outcome: MoveOutcome::Continued,
                    ..
                } => self.scheduler.schedule(now),
                EngineEvent::MoveApplied {
                    outcome: MoveOutcome::Won(Party::Player),
                    ..
                } => self.celebration.burst(),
                EngineEvent::Reset | EngineEvent::SessionStarted { .. } => {
                    self.celebration.clear();
                    self.last_move = None;
                }
                EngineEvent::MoveApplied { .. } => {}
            }
        }
    }
}
