//! The 8x8 checkers board.

use super::position::{BOARD_SIZE, Position};
use super::types::{Cell, Piece, Team};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of filled ranks per side in the standard opening.
const OPENING_RANKS: u8 = 3;

/// 8x8 board, fully populated at all times.
///
/// Exactly one [`Cell`] exists per coordinate; an empty cell encodes
/// vacancy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board with all 64 cells empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates a board in the standard opening arrangement.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.setup_standard();
        board
    }

    /// Study position used by the "load example" action: a black king on
    /// the white back rank and scattered simple pieces.
    #[instrument]
    pub fn example() -> Self {
        let mut board = Self::new();
        let white = [(4, 5), (4, 7)];
        let black = [(0, 1), (3, 2), (1, 2), (1, 4), (2, 7)];
        for (row, col) in white {
            board.place(row, col, Piece::simple(Team::White));
        }
        for (row, col) in black {
            board.place(row, col, Piece::simple(Team::Black));
        }
        board.place(7, 2, Piece::king(Team::Black));
        board
    }

    /// Clears the board and fills three ranks per side on the playable
    /// cells: black on rows 0-2, white on rows 5-7.
    pub fn setup_standard(&mut self) {
        *self = Self::new();
        for pos in Position::all().filter(Position::is_playable) {
            if pos.row() < OPENING_RANKS {
                self.set(pos, Piece::simple(Team::Black).into());
            } else if pos.row() >= BOARD_SIZE - OPENING_RANKS {
                self.set(pos, Piece::simple(Team::White).into());
            }
        }
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(pos) = Position::new(row, col) {
            self.set(pos, piece.into());
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Gets the piece at the given position, if any.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.get(pos).piece()
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row() as usize][pos.col() as usize] = cell;
    }

    /// Exchanges the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        let cell_a = self.get(a);
        self.set(a, self.get(b));
        self.set(b, cell_a);
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Pieces of `team` with their positions, in row-major order.
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| {
            self.piece_at(pos)
                .filter(|piece| piece.team == team)
                .map(|piece| (pos, piece))
        })
    }

    /// Number of pieces `team` has on the board.
    pub fn count(&self, team: Team) -> usize {
        self.pieces(team).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// One line per row from rank 8 down to rank 1, followed by a file
    /// legend. `w`/`b` are simple pieces, `W`/`B` kings, `.` an empty
    /// playable cell and a space an unused light cell.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            result.push_str(&format!("{} ", BOARD_SIZE - row));
            for col in 0..BOARD_SIZE {
                let Some(pos) = Position::new(row, col) else {
                    continue;
                };
                let symbol = match self.get(pos) {
                    Cell::Occupied(piece) => piece.symbol(),
                    Cell::Empty if pos.is_playable() => '.',
                    Cell::Empty => ' ',
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result.push_str("  abcdefgh");
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
