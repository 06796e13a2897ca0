//! Headless replay of a move list.
//!
//! Each move is fed through [`GameState::apply_move`] exactly as a click
//! would be, so refused moves are skipped rather than reported.

use crate::games::tictactoe::{GameState, Player, Position, Status, status};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// A move token that is neither an index nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {token:?}: expected an index (0-8) or a label like \"center\"")]
pub struct ParseMovesError {
    /// The offending token.
    pub token: String,
}

/// Parses a comma-separated move list such as `"0,3,1"` or `"center, top-left"`.
///
/// Numbers are kept as given, even past 8; the game ignores those moves.
/// Empty tokens are skipped.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ParseMovesError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .ok()
                .or_else(|| Position::from_label(token).map(Position::to_index))
                .ok_or_else(|| ParseMovesError {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Plays `moves` from a fresh game and returns the final state.
#[instrument]
pub fn replay(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &index| {
        let next = state.apply_move(index);
        if next == state {
            debug!(index, "Replayed move had no effect");
        }
        next
    })
}

/// Serializable view of a state for machine consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The state itself.
    pub state: GameState,
    /// Status line text.
    pub status: String,
    /// Winner, if any.
    pub winner: Option<Player>,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let projected: Status = status(state);
        Self {
            state: *state,
            status: projected.to_string(),
            winner: projected.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indices_and_labels() {
        assert_eq!(parse_moves("0, 3,center").unwrap(), vec![0, 3, 4]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_moves("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_moves(" , ").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_keeps_large_index() {
        assert_eq!(parse_moves("12").unwrap(), vec![12]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_moves("0,middle").unwrap_err();
        assert_eq!(err.token, "middle");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_snapshot_winner() {
        let snapshot = Snapshot::from(&replay(&[0, 3, 1, 4, 2]));
        assert_eq!(snapshot.status, "Winner: X");
        assert_eq!(snapshot.winner, Some(Player::X));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let won = serde_json::to_value(Snapshot::from(&replay(&[0, 3, 1, 4, 2]))).unwrap();
        assert_eq!(won["status"], "Winner: X");
        assert_eq!(won["winner"], "X");
        assert_eq!(won["state"]["turn"], "O");

        let open = serde_json::to_value(Snapshot::from(&replay(&[4]))).unwrap();
        let keys: Vec<_> = open.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        for key in ["state", "status", "winner"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
        assert!(open["winner"].is_null());
        assert_eq!(open["status"], "Next player: O");
    }
}
