//! Move generation and forced-capture resolution.
//!
//! Generation is a pure function of the board: no highlight or capture
//! bookkeeping is written back to cells, so resolving the must-move set
//! needs no cleanup afterwards.

use super::action::{Candidate, CandidateSet};
use super::board::Board;
use super::position::{Direction, Position};
use super::types::{Piece, PieceKind, Team};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Legal destinations for the piece at `from`, after forced-capture
/// narrowing: if any capture exists, quiet moves are discarded.
///
/// Returns an empty set for an empty cell.
#[instrument(skip(board))]
pub fn candidates(board: &Board, from: Position) -> CandidateSet {
    let Some(piece) = board.piece_at(from) else {
        return CandidateSet::new();
    };
    let set = match piece.kind {
        PieceKind::Simple => simple_candidates(board, from, piece),
        PieceKind::King => king_candidates(board, from, piece),
    };
    let set = set.narrow_to_forced();
    debug!(count = set.len(), forced = set.has_capture(), "Generated candidates");
    set
}

/// Capture destinations only, used to decide whether a chain continues.
#[instrument(skip(board))]
pub fn captures(board: &Board, from: Position) -> CandidateSet {
    candidates(board, from).captures_only()
}

/// Simple piece: quiet steps forward only, captures over an adjacent enemy
/// in all four directions.
fn simple_candidates(board: &Board, from: Position, piece: Piece) -> CandidateSet {
    let mut set = CandidateSet::new();
    for dir in Direction::iter() {
        let Some(near) = from.step(dir, 1) else {
            continue;
        };
        let jump = from.step(dir, 2);
        match (board.get(near).team(), jump) {
            (Some(team), Some(landing)) if team != piece.team && board.is_empty(landing) => {
                set.push(Candidate::capture(landing, near));
            }
            (None, _) if dir.is_forward_for(piece.team) => {
                set.push(Candidate::quiet(near));
            }
            _ => {}
        }
    }
    set
}

/// King: each diagonal is scanned independently. Empty cells before the
/// first enemy are quiet moves; empty cells after it are capture landings
/// over that enemy. Own pieces and any second piece end the scan.
fn king_candidates(board: &Board, from: Position, piece: Piece) -> CandidateSet {
    let mut set = CandidateSet::new();
    for dir in Direction::iter() {
        let mut target: Option<Position> = None;
        for pos in from.ray(dir) {
            match (board.get(pos).team(), target) {
                (None, None) => set.push(Candidate::quiet(pos)),
                (None, Some(captured)) => set.push(Candidate::capture(pos, captured)),
                (Some(team), None) if team != piece.team => target = Some(pos),
                _ => break,
            }
        }
    }
    set
}

/// Pieces of one side that have at least one capture available.
///
/// When the set is non-empty only its members may be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MustMoveSet {
    positions: Vec<Position>,
}

impl MustMoveSet {
    /// Scans every piece of `team` for available captures.
    #[instrument(skip(board))]
    pub fn resolve(board: &Board, team: Team) -> Self {
        let positions: Vec<Position> = board
            .pieces(team)
            .map(|(pos, _)| pos)
            .filter(|pos| candidates(board, *pos).has_capture())
            .collect();
        debug!(%team, forced = positions.len(), "Resolved must-move set");
        Self { positions }
    }

    /// Returns true if `pos` may be selected under the forced-capture rule.
    pub fn permits(&self, pos: Position) -> bool {
        self.positions.is_empty() || self.positions.contains(&pos)
    }

    /// Positions with a capture, in row-major order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns true if no piece is forced to capture.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
