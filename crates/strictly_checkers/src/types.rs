//! Core domain types for checkers.

use serde::{Deserialize, Serialize};

/// Side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// White starts on rows 5-7 and moves first.
    White,
    /// Black starts on rows 0-2.
    Black,
}

impl Team {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of a forward step for this side.
    pub fn forward(self) -> i8 {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }

    /// Row on which a simple piece of this side is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

/// Whether a piece is a plain checker or a crowned king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Moves one step forward, captures one step in any diagonal direction.
    Simple,
    /// Slides any distance along a diagonal.
    King,
}

/// A checker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning side.
    pub team: Team,
    /// Simple or king.
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a simple piece for `team`.
    pub fn simple(team: Team) -> Self {
        Self {
            team,
            kind: PieceKind::Simple,
        }
    }

    /// Creates a king for `team`.
    pub fn king(team: Team) -> Self {
        Self {
            team,
            kind: PieceKind::King,
        }
    }

    /// Returns true if this piece is a king.
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Returns the piece after promotion.
    pub fn crowned(self) -> Self {
        Self::king(self.team)
    }

    /// Single-letter symbol: `w`/`b` for simple pieces, `W`/`B` for kings.
    pub fn symbol(&self) -> char {
        match (self.team, self.kind) {
            (Team::White, PieceKind::Simple) => 'w',
            (Team::White, PieceKind::King) => 'W',
            (Team::Black, PieceKind::Simple) => 'b',
            (Team::Black, PieceKind::King) => 'B',
        }
    }
}

/// Contents of one board cell.
///
/// Vacancy is a value, not an absence: every cell of the board always holds
/// a `Cell`, and the side owning it is derived from the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Occupied by a piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the occupying piece, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }

    /// Returns the owning side, `None` iff the cell is empty.
    pub fn team(&self) -> Option<Team> {
        self.piece().map(|p| p.team)
    }

    /// Returns true if no piece occupies the cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if a piece of `team` occupies the cell.
    pub fn belongs_to(&self, team: Team) -> bool {
        self.team() == Some(team)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}
