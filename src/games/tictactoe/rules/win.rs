//! Win detection logic for tic-tac-toe.

use super::super::{Grid, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(&self, grid: &Grid) -> Option<Player> {
        let [a, b, c] = self.0;
        let mark = grid.get(a).mark()?;
        (grid.get(b).mark() == Some(mark) && grid.get(c).mark() == Some(mark)).then_some(mark)
    }
}

/// The 8 winning lines in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in scan order.
#[instrument]
pub fn winning_line(grid: &Grid) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.owner(grid).is_some())
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` for the owner of the first completed line in
/// [`WINNING_LINES`] order, `None` otherwise. A full grid with no line is
/// `None` as well; draws are not reported.
#[instrument]
pub fn evaluate(grid: &Grid) -> Option<Player> {
    winning_line(grid).and_then(|line| line.owner(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn grid_with(marks: &[(Position, Player)]) -> Grid {
        marks
            .iter()
            .fold(Grid::new(), |grid, &(pos, player)| {
                grid.with(pos, Cell::Occupied(player))
            })
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(evaluate(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&grid), Some(Player::X));
        assert_eq!(winning_line(&grid), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(evaluate(&grid), Some(Player::O));
        assert_eq!(winning_line(&grid), Some(WINNING_LINES[7]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let marks: Vec<_> = line
                .positions()
                .iter()
                .map(|&pos| (pos, Player::O))
                .collect();
            assert_eq!(evaluate(&grid_with(&marks)), Some(Player::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&grid), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable in play, but the scan order still decides.
        let grid = grid_with(&[
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(evaluate(&grid), Some(Player::O));
        assert_eq!(winning_line(&grid), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_full_grid_without_line() {
        let grid = grid_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomRight, Player::X),
            (Position::TopRight, Player::O),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert!(grid.is_full());
        assert_eq!(evaluate(&grid), None);
    }
}
