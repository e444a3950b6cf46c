//! Append-only record of completed turns.

use super::action::MoveKind;
use super::notation::format_move;
use super::position::Position;
use super::types::Team;
use serde::{Deserialize, Serialize};

/// One side's complete move: the cells visited, in order.
///
/// A landing cell equal to the immediately preceding entry is not repeated,
/// so a capture chain `e5 -> c7 -> a5` is stored as three cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    places: Vec<Position>,
    kind: MoveKind,
}

impl Turn {
    /// Starts a turn with a single step.
    pub fn new(from: Position, to: Position, kind: MoveKind) -> Self {
        let mut turn = Self {
            places: Vec::new(),
            kind,
        };
        turn.push_step(from, to, kind);
        turn
    }

    /// Appends a step. Any capture makes the whole turn a capture.
    pub fn push_step(&mut self, from: Position, to: Position, kind: MoveKind) {
        for pos in [from, to] {
            if self.places.last() != Some(&pos) {
                self.places.push(pos);
            }
        }
        if kind == MoveKind::Capture {
            self.kind = MoveKind::Capture;
        }
    }

    /// Cells visited, starting with the moving piece's origin.
    pub fn places(&self) -> &[Position] {
        &self.places
    }

    /// Whether any capture occurred.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_move(self.kind, &self.places))
    }
}

/// A white turn paired with the black reply under one index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    white: Option<Turn>,
    black: Option<Turn>,
}

impl Round {
    /// White's turn in this round.
    pub fn white(&self) -> Option<&Turn> {
        self.white.as_ref()
    }

    /// Black's turn in this round.
    pub fn black(&self) -> Option<&Turn> {
        self.black.as_ref()
    }

    /// The turn `team` played in this round.
    pub fn turn(&self, team: Team) -> Option<&Turn> {
        match team {
            Team::White => self.white(),
            Team::Black => self.black(),
        }
    }

    /// Returns true once both sides have recorded a turn.
    pub fn is_complete(&self) -> bool {
        self.white.is_some() && self.black.is_some()
    }

    fn slot(&mut self, team: Team) -> &mut Option<Turn> {
        match team {
            Team::White => &mut self.white,
            Team::Black => &mut self.black,
        }
    }
}

/// Rounds in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    rounds: Vec<Round>,
}

impl GameLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished turn.
    ///
    /// The current round is filled until both sides have played; only then
    /// does the next turn open a new round.
    pub fn record(&mut self, team: Team, turn: Turn) {
        let open = self
            .rounds
            .last_mut()
            .filter(|round| !round.is_complete() && round.turn(team).is_none());
        match open {
            Some(round) => *round.slot(team) = Some(turn),
            None => {
                let mut round = Round::default();
                *round.slot(team) = Some(turn);
                self.rounds.push(round);
            }
        }
    }

    /// All rounds recorded so far.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds, including a half-filled last one.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns true if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Formats every round as `"<n>. <white> <black>"`.
    pub fn lines(&self) -> Vec<String> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(index, round)| {
                let mut line = format!("{}.", index + 1);
                for turn in [round.white(), round.black()].into_iter().flatten() {
                    line.push(' ');
                    line.push_str(&turn.to_string());
                }
                line
            })
            .collect()
    }
}

impl std::fmt::Display for GameLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_chain_deduplicates_landing() {
        let mut turn = Turn::new(pos(3, 4), pos(1, 2), MoveKind::Capture);
        turn.push_step(pos(1, 2), pos(3, 0), MoveKind::Capture);
        assert_eq!(turn.places(), &[pos(3, 4), pos(1, 2), pos(3, 0)]);
        assert_eq!(turn.to_string(), "e5:c7:a5");
    }

    #[test]
    fn test_quiet_turn_format() {
        let turn = Turn::new(pos(5, 2), pos(4, 3), MoveKind::Quiet);
        assert_eq!(turn.kind(), MoveKind::Quiet);
        assert_eq!(turn.to_string(), "c3-d4");
    }

    #[test]
    fn test_round_index_advances_after_both_sides() {
        let mut log = GameLog::new();
        log.record(Team::White, Turn::new(pos(5, 2), pos(4, 3), MoveKind::Quiet));
        assert_eq!(log.len(), 1);
        log.record(Team::Black, Turn::new(pos(2, 5), pos(3, 4), MoveKind::Quiet));
        assert_eq!(log.len(), 1);
        assert!(log.rounds()[0].is_complete());
        log.record(Team::White, Turn::new(pos(4, 3), pos(2, 5), MoveKind::Capture));
        assert_eq!(log.len(), 2);
        assert_eq!(log.lines(), vec!["1. c3-d4 f6-e5", "2. d4:f6"]);
    }
}
