//! Game rules for tic-tac-toe.
//!
//! Pure functions over grid snapshots, kept apart from state so the
//! state manager and the invariants can share them.

pub mod win;

pub use win::{WINNING_LINES, WinningLine, evaluate, winning_line};
