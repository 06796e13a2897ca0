mod contracts;
mod moves;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::{CellIsEmpty, GameNotWon, LegalMove, MoveRejection, invariants_preserved};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine, evaluate, winning_line};
pub use status::{Status, status, status_text};
pub use types::{Cell, GameState, Grid, Player};
