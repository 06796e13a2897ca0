//! Contract-based validation for tic-tac-toe moves.
//!
//! Preconditions decide whether a move is accepted; the postcondition
//! checks that an accepted move kept the game invariants intact.

use super::invariants::{GameInvariants, InvariantSet};
use super::rules::evaluate;
use super::{GameState, Player, Position};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Reason a move was not applied.
///
/// [`GameState::apply_move`] swallows these and returns the state unchanged;
/// [`GameState::try_apply_move`] hands them to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The game already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(#[error(ignore)] Player),

    /// The cell at the position is already marked.
    #[display("{_0} is already occupied")]
    Occupied(#[error(ignore)] Position),

    /// The index does not name a cell.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(ignore)] usize),
}

/// Precondition: nobody has won yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with the winner if the grid has a completed line.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveRejection> {
        match evaluate(state.grid()) {
            Some(winner) => Err(MoveRejection::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the index names a cell and that cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Resolves `index` to an empty position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, MoveRejection> {
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
        if state.grid().is_empty(pos) {
            Ok(pos)
        } else {
            Err(MoveRejection::Occupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is still open and the
/// cell is free. The winner is checked first.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, MoveRejection> {
        GameNotWon::check(state)?;
        CellIsEmpty::check(state, index)
    }
}

/// Postcondition: a move from a consistent state leads to a consistent state.
///
/// States built by hand through [`GameState::from_parts`] may already be
/// inconsistent; those are not held to the postcondition.
#[instrument(skip_all)]
pub fn invariants_preserved(before: &GameState, after: &GameState) -> bool {
    if GameInvariants::check_all(before).is_err() {
        return true;
    }
    match GameInvariants::check_all(after) {
        Ok(()) => true,
        Err(violations) => {
            for violation in &violations {
                warn!(%violation, "Invariant violated after move");
            }
            false
        }
    }
}
