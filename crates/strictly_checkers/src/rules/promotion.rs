//! Crowning of simple pieces.

use super::super::{Board, Piece, Position};
use tracing::{info, instrument};

/// Returns true if `piece` standing on `pos` sits on its far rank.
pub fn reaches_promotion_row(piece: Piece, pos: Position) -> bool {
    pos.row() == piece.team.promotion_row()
}

/// Returns the crowned piece if the simple piece at `pos` has reached its
/// far rank, `None` if no promotion applies.
///
/// Kings and empty cells are never promoted.
#[instrument(skip(board))]
pub fn check_promotion(board: &Board, pos: Position) -> Option<Piece> {
    let piece = board.piece_at(pos)?;
    if piece.is_king() || !reaches_promotion_row(piece, pos) {
        return None;
    }
    info!(team = %piece.team, at = %pos, "Piece crowned");
    Some(piece.crowned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Team};

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_black_crowned_on_row_seven() {
        let mut board = Board::new();
        board.set(pos(7, 2), Cell::Occupied(Piece::simple(Team::Black)));
        assert_eq!(check_promotion(&board, pos(7, 2)), Some(Piece::king(Team::Black)));
    }

    #[test]
    fn test_white_crowned_on_row_zero() {
        let mut board = Board::new();
        board.set(pos(0, 1), Cell::Occupied(Piece::simple(Team::White)));
        assert_eq!(check_promotion(&board, pos(0, 1)), Some(Piece::king(Team::White)));
    }

    #[test]
    fn test_no_promotion_on_own_back_rank() {
        let mut board = Board::new();
        board.set(pos(7, 0), Cell::Occupied(Piece::simple(Team::White)));
        board.set(pos(0, 1), Cell::Occupied(Piece::simple(Team::Black)));
        assert_eq!(check_promotion(&board, pos(7, 0)), None);
        assert_eq!(check_promotion(&board, pos(0, 1)), None);
    }

    #[test]
    fn test_king_not_promoted_again() {
        let mut board = Board::new();
        board.set(pos(0, 1), Cell::Occupied(Piece::king(Team::White)));
        assert_eq!(check_promotion(&board, pos(0, 1)), None);
        assert_eq!(check_promotion(&Board::new(), pos(0, 1)), None);
    }
}
