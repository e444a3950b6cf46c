//! Undo log for turn-level rollback.
//!
//! Instead of copying the whole board at the start of every turn, each cell
//! write made during the turn records the cell's previous contents. Rolling
//! back replays the records in reverse, which restores the board exactly as
//! it was when the log was last cleared.

use super::board::Board;
use super::position::Position;
use super::types::Cell;

/// One overwritten cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellChange {
    pos: Position,
    before: Cell,
}

/// Cell changes made since the current turn began.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoLog {
    changes: Vec<CellChange>,
}

impl UndoLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn remember(&mut self, board: &Board, pos: Position) {
        self.changes.push(CellChange {
            pos,
            before: board.get(pos),
        });
    }

    /// Writes `cell` at `pos`, remembering what was there.
    pub fn set(&mut self, board: &mut Board, pos: Position, cell: Cell) {
        self.remember(board, pos);
        board.set(pos, cell);
    }

    /// Exchanges two cells, remembering both.
    pub fn swap(&mut self, board: &mut Board, a: Position, b: Position) {
        self.remember(board, a);
        self.remember(board, b);
        board.swap(a, b);
    }

    /// Restores every recorded cell, newest first, and empties the log.
    pub fn rollback(&mut self, board: &mut Board) {
        while let Some(change) = self.changes.pop() {
            board.set(change.pos, change.before);
        }
    }

    /// Forgets all changes, making the current board the new restore point.
    pub fn commit(&mut self) {
        self.changes.clear();
    }

    /// Returns true if nothing has changed since the restore point.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
