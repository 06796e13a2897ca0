//! Strictly Tic-Tac-Toe - a pure tic-tac-toe game core
//!
//! The core owns a 3x3 grid and the turn. Every move produces a new
//! [`GameState`]; front ends only read states and feed cell activations
//! back in.
//!
//! # Architecture
//!
//! - **State**: [`GameState`], [`Grid`], [`Cell`] and [`Player`]
//! - **Rules**: [`evaluate`] scans the 8 winning lines in fixed order
//! - **Moves**: [`GameState::apply_move`] ignores illegal moves,
//!   [`GameState::try_apply_move`] explains them
//! - **Status**: [`status_text`] renders "Winner: X" / "Next player: O"
//! - **Invariants**: composable checks run after every accepted move
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Player, evaluate, status_text};
//!
//! let state = [0, 3, 1, 4, 2]
//!     .iter()
//!     .fold(GameState::new(), |state, &index| state.apply_move(index));
//!
//! assert_eq!(evaluate(state.grid()), Some(Player::X));
//! assert_eq!(status_text(&state), "Winner: X");
//! // The game is over; further moves change nothing.
//! assert_eq!(state.apply_move(5), state);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Replay
pub use replay::{ParseMovesError, Snapshot, parse_moves, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Cell, CellIsEmpty, GameNotWon, GameState, Grid, LegalMove, MoveRejection, Player, Position,
    Status, WINNING_LINES, WinningLine, evaluate, invariants_preserved, status, status_text,
    winning_line,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    BalancedMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, TurnMatchesMarksInvariant,
};
