//! Move application for tic-tac-toe.

use super::contracts::{LegalMove, MoveRejection, invariants_preserved};
use super::{Cell, GameState, Position};
use tracing::{debug, info, instrument};

impl GameState {
    /// Applies a move at `index` (0-8), reporting why it was refused.
    ///
    /// On success the returned state has the current player's mark at
    /// `index` and the turn handed to the opponent. `self` is not touched.
    ///
    /// # Errors
    ///
    /// - [`MoveRejection::GameOver`] if the grid already has a winner
    /// - [`MoveRejection::Occupied`] if the cell is marked
    /// - [`MoveRejection::OutOfBounds`] if `index` is not 0-8
    #[instrument(skip(self), fields(turn = %self.turn()))]
    pub fn try_apply_move(&self, index: usize) -> Result<GameState, MoveRejection> {
        let pos = LegalMove::check(self, index)?;
        let player = self.turn();
        let next = GameState::from_parts(
            self.grid().with(pos, Cell::Occupied(player)),
            player.opponent(),
        );
        debug_assert!(
            invariants_preserved(self, &next),
            "Move at {pos} broke a game invariant"
        );
        info!(%player, position = %pos, "Move accepted");
        Ok(next)
    }

    /// Applies a move at `index` (0-8).
    ///
    /// Moves on an occupied cell, after the game is won, or outside the grid
    /// are ignored: the returned state equals `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> GameState {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                *self
            }
        }
    }

    /// Applies a move at a named position. See [`GameState::apply_move`].
    pub fn place(&self, pos: Position) -> GameState {
        self.apply_move(pos.to_index())
    }
}
