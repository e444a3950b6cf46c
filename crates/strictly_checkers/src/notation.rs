//! Textual move notation.
//!
//! A cell is written `<file><rank>`: file `a`..`h` for columns 0..7, rank
//! `8 - row`. A turn joins its visited cells with `-` (quiet) or `:`
//! (capture), and a round line reads `"<n>. <white> <black>"`.

use super::action::{GameError, MoveKind};
use super::position::{BOARD_SIZE, Position};
use std::str::FromStr;
use tracing::{debug, instrument};

const FILES: &[u8; 8] = b"abcdefgh";

/// Error decoding notation text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// Cell token is not a file `a`-`h` followed by a rank `1`-`8`.
    #[display("Invalid cell '{}'", _0)]
    InvalidCell(String),

    /// Move token contains both `-` and `:`.
    #[display("Move '{}' mixes quiet and capture separators", _0)]
    MixedSeparators(String),

    /// Move token contains neither `-` nor `:`.
    #[display("Move '{}' has no separator", _0)]
    MissingSeparator(String),

    /// Move token lists fewer than two cells.
    #[display("Move '{}' needs at least two cells", _0)]
    TooFewCells(String),

    /// Round line lacks a required move token.
    #[display("Round '{}' is missing a move", _0)]
    MissingMove(String),

    /// The engine produced a different kind of move than the notation declares.
    #[display("Move '{}' declared {} but the engine played {}", token, declared, played)]
    KindMismatch {
        /// Offending move token.
        token: String,
        /// Kind written in the notation.
        declared: MoveKind,
        /// Kind the engine produced.
        played: MoveKind,
    },

    /// The engine rejected a replayed step.
    #[display("Move '{}' rejected: {}", token, cause)]
    Rejected {
        /// Offending move token.
        token: String,
        /// Engine error.
        cause: Box<GameError>,
    },
}

impl std::error::Error for NotationError {}

/// Encodes a position as `<file><rank>`, e.g. row 5 col 0 is `a3`.
pub fn encode_cell(pos: Position) -> String {
    let file = FILES[pos.col() as usize] as char;
    format!("{}{}", file, BOARD_SIZE - pos.row())
}

/// Decodes a `<file><rank>` token.
#[instrument]
pub fn decode_cell(token: &str) -> Result<Position, NotationError> {
    let invalid = || NotationError::InvalidCell(token.to_string());
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }
    let col = FILES.iter().position(|&f| f == bytes[0]).ok_or_else(invalid)?;
    let rank = match bytes[1] {
        b'1'..=b'8' => bytes[1] - b'0',
        _ => return Err(invalid()),
    };
    Position::new(BOARD_SIZE - rank, col as u8).ok_or_else(invalid)
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode_cell(*self))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_cell(s)
    }
}

/// A move token split into its declared kind and visited cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMove {
    /// Quiet (`-`) or capture (`:`).
    pub kind: MoveKind,
    /// Cells in visiting order, starting with the moving piece.
    pub cells: Vec<Position>,
}

/// Parses a move token such as `c3-d4` or `e5:c7:a5`.
#[instrument]
pub fn parse_move(token: &str) -> Result<RecordedMove, NotationError> {
    let quiet = token.contains(MoveKind::Quiet.separator());
    let capture = token.contains(MoveKind::Capture.separator());
    let kind = match (quiet, capture) {
        (true, true) => return Err(NotationError::MixedSeparators(token.to_string())),
        (false, false) => return Err(NotationError::MissingSeparator(token.to_string())),
        (true, false) => MoveKind::Quiet,
        (false, true) => MoveKind::Capture,
    };

    let parts: Vec<&str> = token.split(kind.separator()).collect();
    if parts.len() < 2 {
        return Err(NotationError::TooFewCells(token.to_string()));
    }
    let cells = parts
        .into_iter()
        .map(decode_cell)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecordedMove { kind, cells })
}

/// Formats visited cells as a move token.
pub fn format_move(kind: MoveKind, cells: &[Position]) -> String {
    cells
        .iter()
        .map(|pos| encode_cell(*pos))
        .collect::<Vec<_>>()
        .join(&kind.separator().to_string())
}

/// Move tokens of one round line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTokens<'a> {
    /// White's move token.
    pub white: &'a str,
    /// Black's move token, absent only on the final line.
    pub black: Option<&'a str>,
}

/// Splits a round line into its move tokens.
///
/// The leading index token is required but not interpreted. Every line
/// except the final one must carry a black move. Tokens after the black
/// move, such as annotations, are ignored.
#[instrument]
pub fn split_round(line: &str, is_final: bool) -> Result<RoundTokens<'_>, NotationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 || (!is_final && tokens.len() < 3) {
        return Err(NotationError::MissingMove(line.to_string()));
    }
    if tokens.len() > 3 {
        debug!(ignored = tokens.len() - 3, "Trailing round tokens ignored");
    }
    Ok(RoundTokens {
        white: tokens[1],
        black: tokens.get(2).copied(),
    })
}
