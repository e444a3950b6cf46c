//! Game rules for checkers.
//!
//! This module contains pure functions for evaluating board state
//! according to checkers rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod promotion;
pub mod win;

pub use promotion::{check_promotion, reaches_promotion_row};
pub use win::check_winner;
