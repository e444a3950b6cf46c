//! Move candidates and the errors raised by turn operations.
//!
//! Candidates are computed on demand by the move generator and never stored
//! on the board itself. Every rejected operation is reported through
//! [`GameError`] so a front end can surface feedback without the session
//! being harmed.

use super::notation::NotationError;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Whether a move captured a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// A move to an empty cell with no capture.
    Quiet,
    /// A jump that removes an enemy piece.
    Capture,
}

impl MoveKind {
    /// Separator between cells in notation: `-` for quiet, `:` for capture.
    pub fn separator(self) -> char {
        match self {
            MoveKind::Quiet => '-',
            MoveKind::Capture => ':',
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::Quiet => write!(f, "quiet"),
            MoveKind::Capture => write!(f, "capture"),
        }
    }
}

/// A legal destination for the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Landing cell.
    pub destination: Position,
    /// Cell of the piece removed by this move, for captures.
    pub captured: Option<Position>,
}

impl Candidate {
    /// Creates a quiet-move candidate.
    pub fn quiet(destination: Position) -> Self {
        Self {
            destination,
            captured: None,
        }
    }

    /// Creates a capture candidate jumping over `captured`.
    pub fn capture(destination: Position, captured: Position) -> Self {
        Self {
            destination,
            captured: Some(captured),
        }
    }

    /// Kind of this move.
    pub fn kind(&self) -> MoveKind {
        if self.captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        }
    }
}

/// Destinations computed for one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Returns true if any candidate is a capture.
    pub fn has_capture(&self) -> bool {
        self.candidates.iter().any(|c| c.captured.is_some())
    }

    /// Keeps only captures when at least one exists.
    pub fn narrow_to_forced(mut self) -> Self {
        if self.has_capture() {
            self.candidates.retain(|c| c.captured.is_some());
        }
        self
    }

    /// Drops all quiet candidates.
    pub fn captures_only(mut self) -> Self {
        self.candidates.retain(|c| c.captured.is_some());
        self
    }

    /// Finds the candidate landing on `destination`.
    pub fn find(&self, destination: Position) -> Option<Candidate> {
        self.candidates
            .iter()
            .copied()
            .find(|c| c.destination == destination)
    }

    /// Iterates over the candidates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the piece has nowhere to go.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Outcome of a successful `select` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The piece is now selected and its destinations computed.
    Selected,
    /// The already-selected piece was clicked again and released.
    Deselected,
}

/// Why a selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectionError {
    /// The cell holds no piece of the side to move.
    #[display("Cell {} holds no piece of the side to move", _0)]
    NotYourPiece(Position),

    /// Another piece of the same side has a capture available.
    #[display("Piece at {} cannot move while a capture is available elsewhere", _0)]
    MustCaptureElsewhere(Position),

    /// A different piece is already selected.
    #[display("Another piece is already selected; cannot select {}", _0)]
    AlreadyPromptedElsewhere(Position),

    /// The moving piece is in the middle of a capture chain.
    #[display("A capture chain is in progress")]
    ChainInProgress,

    /// The side to move has already finished its move this turn.
    #[display("The turn is already complete")]
    TurnComplete,
}

/// Why a turn could not be ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EndTurnError {
    /// The moving piece can still capture and must do so.
    #[display("The capture chain must be completed")]
    CaptureChainUnfinished,

    /// No move has been played this turn.
    #[display("No move has been played this turn")]
    TurnNotStarted,
}

/// Error raised by a session operation.
///
/// All variants are recoverable; the session is left unchanged (or reset to
/// the standard opening for notation failures).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Selection refused.
    #[display("Illegal selection: {}", _0)]
    IllegalSelection(SelectionError),

    /// Target is not among the computed candidates for the selected piece.
    #[display("Illegal destination: {}", _0)]
    IllegalDestination(Position),

    /// Turn ended too early.
    #[display("Cannot end turn: {}", _0)]
    PrematureEndTurn(EndTurnError),

    /// No selection or move to roll back.
    #[display("Nothing to cancel")]
    NothingToCancel,

    /// A game record could not be decoded or replayed.
    #[display("Notation error: {}", _0)]
    NotationDecode(NotationError),

    /// A commit would have broken a game invariant; the move was undone.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SelectionError {}

impl std::error::Error for EndTurnError {}

impl std::error::Error for GameError {}

impl From<SelectionError> for GameError {
    fn from(err: SelectionError) -> Self {
        GameError::IllegalSelection(err)
    }
}

impl From<EndTurnError> for GameError {
    fn from(err: EndTurnError) -> Self {
        GameError::PrematureEndTurn(err)
    }
}

impl From<NotationError> for GameError {
    fn from(err: NotationError) -> Self {
        GameError::NotationDecode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_narrowing_drops_quiet_moves_when_capture_exists() {
        let mut set = CandidateSet::new();
        set.push(Candidate::quiet(pos(4, 1)));
        set.push(Candidate::capture(pos(3, 4), pos(4, 3)));
        let narrowed = set.narrow_to_forced();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed.find(pos(3, 4)).map(|c| c.kind()), Some(MoveKind::Capture));
    }

    #[test]
    fn test_narrowing_keeps_quiet_moves_without_capture() {
        let mut set = CandidateSet::new();
        set.push(Candidate::quiet(pos(4, 1)));
        set.push(Candidate::quiet(pos(4, 3)));
        assert_eq!(set.narrow_to_forced().len(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::from(SelectionError::NotYourPiece(pos(2, 1)));
        assert!(err.to_string().contains("holds no piece"));
        let err = GameError::from(EndTurnError::CaptureChainUnfinished);
        assert!(err.to_string().contains("capture chain"));
    }
}
