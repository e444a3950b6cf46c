//! Win detection logic for checkers.

use super::super::{Board, Team};
use tracing::instrument;

/// Checks if either side has run out of pieces.
///
/// Returns the side still holding pieces when the other has none,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Team> {
    if board.count(Team::White) == 0 {
        Some(Team::Black)
    } else if board.count(Team::Black) == 0 {
        Some(Team::White)
    } else {
        None
    }
}
