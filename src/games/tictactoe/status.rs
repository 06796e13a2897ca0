//! Status line projection.

use super::rules::evaluate;
use super::{GameState, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line says about a state.
///
/// This is derived on demand and never stored. A full grid without a
/// winner still reads as [`Status::NextPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The game is open and this player moves next.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(player),
            Status::NextPlayer(_) => None,
        }
    }
}

/// Projects a state onto its status.
#[instrument(skip(state))]
pub fn status(state: &GameState) -> Status {
    match evaluate(state.grid()) {
        Some(winner) => Status::Winner(winner),
        None => Status::NextPlayer(state.turn()),
    }
}

/// Renders the status line, e.g. `"Winner: X"` or `"Next player: O"`.
pub fn status_text(state: &GameState) -> String {
    status(state).to_string()
}
