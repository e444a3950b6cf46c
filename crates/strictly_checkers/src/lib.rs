//! Strictly Checkers - a pure checkers rule engine
//!
//! This library models an 8x8 checkers game: move generation, forced
//! captures, multi-jump chains, promotion, turn control with full rollback,
//! and a compact textual notation for recording and replaying games.
//!
//! # Architecture
//!
//! - **Board**: cell storage and the two built-in setups
//! - **Movegen**: candidate moves per piece and the forced-capture set
//! - **Game**: the turn controller (`select` / `commit` / `end_turn` / `cancel_turn`)
//! - **Notation**: cell and move encoding, round-line replay
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{Game, MoveKind, Position};
//!
//! # fn example() -> Result<(), strictly_checkers::GameError> {
//! let mut game = Game::new();
//! let from: Position = "c3".parse()?;
//! let to: Position = "d4".parse()?;
//! game.select(from)?;
//! assert_eq!(game.commit(to)?, MoveKind::Quiet);
//! game.end_turn()?;
//! assert_eq!(game.log().to_string(), "1. c3-d4");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod game;
mod log;
mod movegen;
mod notation;
mod position;
mod replay;
mod types;
mod undo;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use board::Board;
pub use position::{BOARD_SIZE, Direction, Position};
pub use types::{Cell, Piece, PieceKind, Team};

// Crate-level exports - Moves and errors
pub use action::{
    Candidate, CandidateSet, EndTurnError, GameError, MoveKind, SelectOutcome, SelectionError,
};

// Crate-level exports - Move generation
pub use movegen::{MustMoveSet, candidates, captures};

// Crate-level exports - Turn control
pub use game::{Game, Highlight, Phase};
pub use log::{GameLog, Round, Turn};
pub use undo::UndoLog;

// Crate-level exports - Notation and replay
pub use notation::{
    NotationError, RecordedMove, RoundTokens, decode_cell, encode_cell, format_move, parse_move,
    split_round,
};
pub use replay::RecordError;

// Crate-level exports - Front-end snapshot
pub use view::{GameView, SelectionView};
