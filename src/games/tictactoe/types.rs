//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, also used as the turn marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe grid.
///
/// Cells are stored in row-major order, so `index = row * 3 + col`.
/// A grid is never edited in place by the game; [`Grid::with`] returns
/// a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; 9],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a grid from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, or `None` when the index is not 0-8.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of this grid with `pos` set to `cell`.
    #[must_use]
    pub fn with(&self, pos: Position, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = cell;
        Self { cells }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Checks whether every cell is marked.
    ///
    /// A full grid is not a game outcome on its own; see
    /// [`evaluate`](super::rules::evaluate).
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty cells show their 1-based key so a player knows what to press.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Complete game state: the grid and whose turn it is.
///
/// States are values. Moves produce a new `GameState` and never touch the
/// one they were applied to, so a caller can keep old states around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    grid: Grid,
    /// Player who places the next mark.
    turn: Player,
}

impl GameState {
    /// Creates a new game: empty grid, X to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            turn: Player::X,
        }
    }

    /// Builds a state from an arbitrary grid and turn.
    ///
    /// No consistency checks are made; use
    /// [`GameInvariants`](super::invariants::GameInvariants) to validate.
    pub fn from_parts(grid: Grid, turn: Player) -> Self {
        Self { grid, turn }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.cells().iter().all(|c| *c == Cell::Empty));
        assert!(!grid.is_full());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let grid = Grid::new();
        let next = grid.with(Position::Center, Cell::Occupied(Player::X));
        assert_eq!(grid.get(Position::Center), Cell::Empty);
        assert_eq!(next.get(Position::Center), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_cell_out_of_range() {
        assert_eq!(Grid::new().cell(9), None);
        assert_eq!(Grid::new().cell(8), Some(Cell::Empty));
    }

    #[test]
    fn test_display() {
        let grid = Grid::new()
            .with(Position::TopLeft, Cell::Occupied(Player::X))
            .with(Position::Center, Cell::Occupied(Player::O));
        assert_eq!(grid.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.grid(), &Grid::new());
    }
}
