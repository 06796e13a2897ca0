//! Turn invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is to move exactly when both players have placed the same
/// number of marks.
///
/// Since X always opens, this is the same as saying the turn flipped on
/// every accepted move and on nothing else.
pub struct TurnMatchesMarksInvariant;

impl Invariant<GameState> for TurnMatchesMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.grid().count(Player::X);
        let o = state.grid().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
