//! Board coordinates and diagonal directions.

use super::types::Team;
use serde::{Deserialize, Serialize};

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// A cell coordinate, 0-indexed. Row 0 is black's back rank.
///
/// Deserialization goes through [`Position::new`], so an off-board
/// coordinate is rejected rather than reaching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
            .ok_or_else(|| format!("position ({}, {}) is off the board", raw.row, raw.col))
    }
}

impl Position {
    /// Creates a position, or `None` if it lies off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0-7).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index (0-7).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns true for the cells pieces can stand on (`row` odd XOR `col` odd).
    pub fn is_playable(&self) -> bool {
        (self.row % 2 == 1) != (self.col % 2 == 1)
    }

    /// Returns the cell `distance` steps away along `dir`, if on the board.
    pub fn step(self, dir: Direction, distance: u8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row as i16 + dr as i16 * distance as i16;
        let col = self.col as i16 + dc as i16 * distance as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Cells walked outward from `self` along `dir`, nearest first.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Position> {
        (1..BOARD_SIZE).map_while(move |distance| self.step(dir, distance))
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

/// One of the four diagonals, named as seen from white's side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Toward row 0, column decreasing.
    UpLeft,
    /// Toward row 0, column increasing.
    UpRight,
    /// Toward row 7, column decreasing.
    DownLeft,
    /// Toward row 7, column increasing.
    DownRight,
}

impl Direction {
    /// (row delta, column delta) of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Returns true if a step along this diagonal advances `team`.
    pub fn is_forward_for(self, team: Team) -> bool {
        self.delta().0 == team.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::UpLeft, 1), None);
        assert_eq!(
            corner.step(Direction::DownRight, 2),
            Position::new(2, 2)
        );
    }

    #[test]
    fn test_ray_runs_to_edge() {
        let start = Position::new(7, 0).unwrap();
        let cells: Vec<_> = start.ray(Direction::UpRight).collect();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.last().copied(), Position::new(0, 7));
        assert_eq!(start.ray(Direction::DownLeft).count(), 0);
    }

    #[test]
    fn test_two_forward_directions_per_team() {
        let white = Direction::iter().filter(|d| d.is_forward_for(Team::White)).count();
        let black = Direction::iter().filter(|d| d.is_forward_for(Team::Black)).count();
        assert_eq!((white, black), (2, 2));
        assert!(Direction::UpLeft.is_forward_for(Team::White));
        assert!(Direction::DownRight.is_forward_for(Team::Black));
    }

    #[test]
    fn test_playable_parity() {
        assert!(Position::new(0, 1).unwrap().is_playable());
        assert!(!Position::new(0, 0).unwrap().is_playable());
        assert_eq!(Position::all().filter(|p| p.is_playable()).count(), 32);
    }

    #[test]
    fn test_deserialize_rejects_off_board() {
        assert!(serde_json::from_str::<Position>(r#"{"row":9,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":8}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Position>(r#"{"row":5,"col":2}"#).unwrap(),
            Position::new(5, 2).unwrap()
        );
    }
}
