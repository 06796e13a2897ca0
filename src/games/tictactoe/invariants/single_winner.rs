//! Single winner invariant: completed lines never belong to both players.

use super::super::GameState;
use super::super::rules::WINNING_LINES;
use super::Invariant;

/// Invariant: at most one player owns a completed line.
///
/// Play stops at the first completed line, so a reachable state can hold
/// several lines (one move may finish two) but never lines for both sides.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let mut owners = WINNING_LINES
            .iter()
            .filter_map(|line| line.owner(state.grid()));
        match owners.next() {
            Some(first) => owners.all(|owner| owner == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Completed lines all belong to the same player"
    }
}
