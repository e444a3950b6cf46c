//! Turn controller: the session object driving one game.
//!
//! A turn moves through four phases:
//!
//! - `Idle` - nothing selected
//! - `Selecting` - a piece is selected and its destinations computed
//! - `MidCapture` - a capture just landed and the same piece must keep capturing
//! - `TurnComplete` - no continuation remains; the turn can be ended
//!
//! Every board write made during a turn goes through an undo log, so
//! cancelling restores the position the turn started from exactly.

use super::action::{
    CandidateSet, EndTurnError, GameError, MoveKind, SelectOutcome, SelectionError,
};
use super::board::Board;
use super::contracts::{CommitContract, Contract, SelectContract};
use super::log::{GameLog, Turn};
use super::movegen::{MustMoveSet, candidates, captures};
use super::position::Position;
use super::rules::{check_promotion, check_winner};
use super::types::{Cell, Team};
use super::undo::UndoLog;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Turn phase with the data each phase carries.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TurnPhase {
    Idle,
    Selecting {
        from: Position,
        candidates: CandidateSet,
    },
    MidCapture {
        at: Position,
        candidates: CandidateSet,
    },
    TurnComplete,
}

/// Public view of the current turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No piece selected.
    Idle,
    /// A piece is selected.
    Selecting,
    /// A capture chain must be continued.
    MidCapture,
    /// The turn can be ended.
    TurnComplete,
}

/// Advisory rendering state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Nothing to show.
    Default,
    /// The selected piece.
    Selected,
    /// Reachable by a quiet move.
    ReachableQuiet,
    /// Reachable by a capture.
    ReachableRequired,
}

/// One checkers game session.
///
/// All operations run to completion synchronously. Sessions are plain values:
/// any number may exist side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Team,
    phase: TurnPhase,
    turn: Option<Turn>,
    must_move: MustMoveSet,
    log: GameLog,
    winner: Option<Team>,
    undo: UndoLog,
}

impl Game {
    /// Creates a game in the standard opening, white to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Team::White)
    }

    /// Creates a game from the example study position, white to move.
    #[instrument]
    pub fn example() -> Self {
        Self::from_board(Board::example(), Team::White)
    }

    /// Creates a game from an arbitrary position.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Team) -> Self {
        let must_move = MustMoveSet::resolve(&board, to_move);
        Self {
            board,
            to_move,
            phase: TurnPhase::Idle,
            turn: None,
            must_move,
            log: GameLog::new(),
            winner: None,
            undo: UndoLog::new(),
        }
    }

    /// Restarts from the standard opening, discarding the log.
    #[instrument(skip(self))]
    pub fn reset_standard(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Restarts from the example position, discarding the log.
    #[instrument(skip(self))]
    pub fn load_example(&mut self) {
        info!("Loading example position");
        *self = Self::example();
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Team {
        self.to_move
    }

    /// Returns the current turn phase.
    pub fn phase(&self) -> Phase {
        match self.phase {
            TurnPhase::Idle => Phase::Idle,
            TurnPhase::Selecting { .. } => Phase::Selecting,
            TurnPhase::MidCapture { .. } => Phase::MidCapture,
            TurnPhase::TurnComplete => Phase::TurnComplete,
        }
    }

    /// Returns the round log.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Returns the winner once one side has no pieces left.
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Returns the pieces of the side to move that must capture.
    pub fn must_move(&self) -> &MustMoveSet {
        &self.must_move
    }

    /// Returns the turn played so far, if a move has been made.
    pub fn current_turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    /// Returns the selected piece, or the capturing piece mid-chain.
    pub fn selected(&self) -> Option<Position> {
        match &self.phase {
            TurnPhase::Selecting { from, .. } => Some(*from),
            TurnPhase::MidCapture { at, .. } => Some(*at),
            TurnPhase::Idle | TurnPhase::TurnComplete => None,
        }
    }

    /// Returns the destinations of the selected piece.
    pub fn candidates(&self) -> Option<&CandidateSet> {
        match &self.phase {
            TurnPhase::Selecting { candidates, .. } | TurnPhase::MidCapture { candidates, .. } => {
                Some(candidates)
            }
            TurnPhase::Idle | TurnPhase::TurnComplete => None,
        }
    }

    /// Returns the rendering cue for `pos`.
    pub fn highlight(&self, pos: Position) -> Highlight {
        if self.selected() == Some(pos) {
            return Highlight::Selected;
        }
        match self.candidates().and_then(|set| set.find(pos)) {
            Some(candidate) => match candidate.kind() {
                MoveKind::Quiet => Highlight::ReachableQuiet,
                MoveKind::Capture => Highlight::ReachableRequired,
            },
            None => Highlight::Default,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Turn operations
    // ─────────────────────────────────────────────────────────

    /// Selects the piece at `pos`, or releases it if it is already selected.
    ///
    /// # Errors
    ///
    /// - `NotYourPiece` if the cell holds no piece of the side to move
    /// - `MustCaptureElsewhere` if another piece is forced to capture
    /// - `AlreadyPromptedElsewhere` if a different piece is selected
    /// - `ChainInProgress` / `TurnComplete` once a move has been played
    #[instrument(skip(self), fields(to_move = %self.to_move, at = %pos))]
    pub fn select(&mut self, pos: Position) -> Result<SelectOutcome, GameError> {
        let refused = |err: SelectionError| {
            warn!(error = %err, "Selection refused");
            Err(GameError::IllegalSelection(err))
        };
        match self.phase {
            TurnPhase::TurnComplete => refused(SelectionError::TurnComplete),
            TurnPhase::MidCapture { .. } => refused(SelectionError::ChainInProgress),
            TurnPhase::Selecting { from, .. } if from == pos => {
                debug!("Selection released");
                self.phase = TurnPhase::Idle;
                Ok(SelectOutcome::Deselected)
            }
            TurnPhase::Selecting { .. } => refused(SelectionError::AlreadyPromptedElsewhere(pos)),
            TurnPhase::Idle => {
                if let Err(err) = SelectContract::pre(self, &pos) {
                    warn!(error = %err, "Selection refused");
                    return Err(err);
                }
                let candidates = candidates(&self.board, pos);
                debug!(count = candidates.len(), "Piece selected");
                self.phase = TurnPhase::Selecting {
                    from: pos,
                    candidates,
                };
                Ok(SelectOutcome::Selected)
            }
        }
    }

    /// Moves the selected piece to `target`.
    ///
    /// The piece and target cell exchange places, a captured piece is
    /// removed, the step is appended to the current turn and promotion is
    /// applied. After a capture the piece's further captures become the
    /// active candidates; the turn is complete once none remain.
    ///
    /// # Errors
    ///
    /// - `IllegalDestination` if no piece is selected or `target` is not one
    ///   of its candidates
    /// - `InvariantViolation` if the resulting position breaks a
    ///   [`CheckersInvariants`](crate::invariants::CheckersInvariants) rule;
    ///   the session is restored to its state before the call
    #[instrument(skip(self), fields(to_move = %self.to_move, target = %target))]
    pub fn commit(&mut self, target: Position) -> Result<MoveKind, GameError> {
        if let Err(err) = CommitContract::pre(self, &target) {
            warn!(error = %err, "Commit refused");
            return Err(err);
        }
        let (Some(from), Some(candidate)) = (
            self.selected(),
            self.candidates().and_then(|set| set.find(target)),
        ) else {
            return Err(GameError::IllegalDestination(target));
        };
        let before = self.clone();

        self.undo.swap(&mut self.board, from, target);
        if let Some(captured) = candidate.captured {
            self.undo.set(&mut self.board, captured, Cell::Empty);
        }

        let kind = candidate.kind();
        match self.turn.as_mut() {
            Some(turn) => turn.push_step(from, target, kind),
            None => self.turn = Some(Turn::new(from, target, kind)),
        }

        if let Some(king) = check_promotion(&self.board, target) {
            self.undo.set(&mut self.board, target, king.into());
        }

        self.phase = match kind {
            MoveKind::Quiet => TurnPhase::TurnComplete,
            MoveKind::Capture => {
                let next = captures(&self.board, target);
                if next.is_empty() {
                    TurnPhase::TurnComplete
                } else {
                    debug!(count = next.len(), "Capture chain continues");
                    TurnPhase::MidCapture {
                        at: target,
                        candidates: next,
                    }
                }
            }
        };
        if let Err(err) = CommitContract::post(&before, self) {
            warn!(error = %err, "Commit broke an invariant, restoring");
            *self = before;
            return Err(err);
        }

        info!(%from, %kind, "Move committed");
        Ok(kind)
    }

    /// Ends the turn: logs it, checks for a winner and hands the move to
    /// the other side.
    ///
    /// # Errors
    ///
    /// - `CaptureChainUnfinished` while the moving piece can still capture
    /// - `TurnNotStarted` if no move was played
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        let refused = |err: EndTurnError| {
            warn!(error = %err, "End of turn refused");
            Err(GameError::PrematureEndTurn(err))
        };
        match self.phase {
            TurnPhase::TurnComplete => {}
            TurnPhase::MidCapture { .. } => return refused(EndTurnError::CaptureChainUnfinished),
            TurnPhase::Idle | TurnPhase::Selecting { .. } => {
                return refused(EndTurnError::TurnNotStarted);
            }
        }
        let Some(turn) = self.turn.take() else {
            return refused(EndTurnError::TurnNotStarted);
        };

        info!(turn = %turn, "Turn ended");
        self.log.record(self.to_move, turn);

        if let Some(winner) = check_winner(&self.board) {
            info!(%winner, "Game won");
            self.winner = Some(winner);
        }

        self.undo.commit();
        self.to_move = self.to_move.opponent();
        self.phase = TurnPhase::Idle;
        self.must_move = MustMoveSet::resolve(&self.board, self.to_move);
        Ok(())
    }

    /// Discards the current selection and any moves played this turn,
    /// restoring the position the turn started from.
    ///
    /// # Errors
    ///
    /// Returns `NothingToCancel` when idle with no move played.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn cancel_turn(&mut self) -> Result<(), GameError> {
        if self.phase == TurnPhase::Idle && self.turn.is_none() {
            warn!("Nothing to cancel");
            return Err(GameError::NothingToCancel);
        }
        self.undo.rollback(&mut self.board);
        self.turn = None;
        self.phase = TurnPhase::Idle;
        self.must_move = MustMoveSet::resolve(&self.board, self.to_move);
        info!("Turn cancelled");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
