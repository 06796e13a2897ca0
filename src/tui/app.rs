//! Application state and logic.

use crossterm::event::KeyCode;
use strictly_tictactoe::{GameState, Position, WinningLine, status_text, winning_line};
use tracing::{debug, info};

use super::input::{digit_position, move_cursor};

/// Main application state.
///
/// Holds the one live [`GameState`]. Each activation replaces it with the
/// state returned by the core.
pub struct App {
    state: GameState,
    cursor: Position,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            show_hints,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current state.
    pub fn status_line(&self) -> String {
        status_text(&self.state)
    }

    /// Completed line to highlight, if the game is won.
    pub fn highlight(&self) -> Option<WinningLine> {
        winning_line(self.state.grid())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.activate(pos);
                }
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    /// Activates a cell, as a click would.
    pub fn activate(&mut self, pos: Position) {
        debug!(position = %pos, "Cell activated");
        self.state = self.state.place(pos);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::new();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Cell, Player};

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state().grid().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(app.status_line(), "Next player: O");
    }

    #[test]
    fn test_digits_place_directly() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.status_line(), "Winner: X");
        assert!(app.highlight().is_some_and(|line| line.contains(Position::TopRight)));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(true);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
