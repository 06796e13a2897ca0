//! Balanced marks invariant: X never trails O and leads by at most one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `#X - #O` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.grid().count(Player::X);
        let o = state.grid().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
