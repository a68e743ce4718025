//! Application state and event handling.

use crossterm::event::KeyCode;
use tictactoe_plus::{GameMode, GameSession};
use tracing::debug;

/// Main application state: the session plus screen-local flags.
pub struct App {
    session: GameSession,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application for the given game mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            session: GameSession::new(mode),
            status_message: "Player X's turn.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player has asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// Keys `1`-`9` place a mark at the corresponding cell (row-major),
    /// `r` resets, `q` quits. Illegal moves are ignored without a message;
    /// a filled cell simply stops responding.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.status_message = "Game reset. Player X's turn.".to_string();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    self.place_mark(digit as usize - 1);
                }
            }
            _ => {}
        }
    }

    /// Handles one turn-clock tick (Plus Mode).
    pub fn handle_tick(&mut self) {
        let (state, timer) = self.session.tick();
        if timer.is_some() && !state.is_over() {
            self.status_message = format!("Player {}'s turn.", state.current_player());
        }
    }

    fn place_mark(&mut self, pos: usize) {
        match self.session.apply_move(pos) {
            Ok(state) => {
                self.status_message = match state.winner() {
                    Some(winner) => {
                        format!("{} wins! Press 'r' to play again or 'q' to quit.", winner)
                    }
                    None => format!("Player {}'s turn.", state.current_player()),
                };
            }
            Err(e) => {
                // Silent no-op toward the player.
                debug!(pos, error = %e, "ignored illegal move");
            }
        }
    }
}
