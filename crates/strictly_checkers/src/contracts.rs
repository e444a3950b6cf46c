//! Contract-based validation for checkers.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{GameError, SelectionError};
use super::game::Game;
use super::invariants::{CheckersInvariants, InvariantSet};
use super::position::Position;
use super::types::Team;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Selection Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell holds a piece of the side to move.
pub struct PieceOfSideToMove;

impl PieceOfSideToMove {
    /// Checks the cell at `pos`.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), SelectionError> {
        if game.board().get(pos).belongs_to(game.to_move()) {
            Ok(())
        } else {
            Err(SelectionError::NotYourPiece(pos))
        }
    }
}

/// Precondition: if any piece of the side to move can capture, the selected
/// piece is one of them.
pub struct ForcedCaptureRespected;

impl ForcedCaptureRespected {
    /// Checks `pos` against the must-move set.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), SelectionError> {
        if game.must_move().permits(pos) {
            Ok(())
        } else {
            Err(SelectionError::MustCaptureElsewhere(pos))
        }
    }
}

/// Contract for selecting a piece from an idle turn.
pub struct SelectContract;

impl Contract<Game, Position> for SelectContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), GameError> {
        PieceOfSideToMove::check(*pos, game)?;
        ForcedCaptureRespected::check(*pos, game)?;
        Ok(())
    }

    fn post(_before: &Game, _after: &Game) -> Result<(), GameError> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Commit Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the target is among the selected piece's candidates.
pub struct DestinationIsCandidate;

impl DestinationIsCandidate {
    /// Checks `target` against the active candidate set.
    #[instrument(skip(game))]
    pub fn check(target: Position, game: &Game) -> Result<(), GameError> {
        match game.candidates() {
            Some(set) if set.find(target).is_some() => Ok(()),
            _ => Err(GameError::IllegalDestination(target)),
        }
    }
}

/// Postcondition: a commit never adds pieces to either side.
pub struct PieceCountNonIncreasing;

impl PieceCountNonIncreasing {
    /// Compares piece counts before and after.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Game, after: &Game) -> bool {
        Team::iter().all(|team| {
            let (was, now) = (before.board().count(team), after.board().count(team));
            if now > was {
                warn!(%team, was, now, "Piece count grew during a commit");
            }
            now <= was
        })
    }
}

/// Contract for committing a move.
///
/// Preconditions:
/// - A piece is selected and the target is one of its candidates
///
/// Postconditions:
/// - No side gained pieces
/// - Every invariant in [`CheckersInvariants`] holds
pub struct CommitContract;

impl Contract<Game, Position> for CommitContract {
    fn pre(game: &Game, target: &Position) -> Result<(), GameError> {
        DestinationIsCandidate::check(*target, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        if !PieceCountNonIncreasing::holds(before, after) {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: piece count grew".to_string(),
            ));
        }
        CheckersInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
