//! Piece budget invariant: no side ever holds more than its opening count.

use super::super::{Game, Team};
use super::Invariant;
use strum::IntoEnumIterator;

/// Most pieces one side can own.
pub const MAX_PIECES: usize = 12;

/// Invariant: each side has at most twelve pieces on the board.
pub struct PieceBudgetInvariant;

impl Invariant<Game> for PieceBudgetInvariant {
    fn holds(game: &Game) -> bool {
        Team::iter().all(|team| game.board().count(team) <= MAX_PIECES)
    }

    fn description() -> &'static str {
        "Each side has at most twelve pieces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Piece, Position};

    #[test]
    fn test_standard_opening_holds() {
        assert!(PieceBudgetInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_overfull_side_violates() {
        let mut board = Board::new();
        for pos in Position::all().filter(Position::is_playable).take(13) {
            board.set(pos, Cell::Occupied(Piece::simple(Team::Black)));
        }
        let game = Game::from_board(board, Team::White);
        assert!(!PieceBudgetInvariant::holds(&game));
    }
}
