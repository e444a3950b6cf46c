//! Replaying recorded games through the turn controller.
//!
//! Every recorded move is driven through `select` / `commit` / `end_turn`, so
//! a record is only accepted if the engine itself would have allowed it. Any
//! failure resets the session to the standard opening before the error is
//! reported.

use super::action::{GameError, MoveKind, SelectOutcome, SelectionError};
use super::game::Game;
use super::notation::{NotationError, parse_move, split_round};
use tracing::{info, instrument, warn};

/// Error replaying a multi-line game record.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RecordError {
    /// The record holds no round lines.
    #[display("Game record is empty")]
    EmptyRecord,

    /// A round line failed to decode or replay.
    #[display("Line {} ('{}'): {}", number, text, error)]
    Line {
        /// One-based line number.
        number: usize,
        /// The offending line.
        text: String,
        /// Underlying failure.
        error: GameError,
    },
}

impl std::error::Error for RecordError {}

impl Game {
    /// Replays one round line such as `"3. e3-f4 d6:f4:h2"`.
    ///
    /// `is_final` allows the black move to be missing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotationDecode`] if the line cannot be decoded or
    /// the engine rejects one of its moves. The session is reset to the
    /// standard opening in that case.
    #[instrument(skip(self))]
    pub fn replay_round(&mut self, line: &str, is_final: bool) -> Result<(), GameError> {
        match self.apply_round(line, is_final) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Round rejected, resetting board");
                self.reset_standard();
                Err(GameError::NotationDecode(err))
            }
        }
    }

    /// Replays a whole record, one round per non-empty line, starting from
    /// the standard opening.
    ///
    /// Leading and trailing blank lines are ignored. Returns the number of
    /// rounds replayed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] naming the first line that failed; the
    /// session is left in the standard opening.
    #[instrument(skip(self, text))]
    pub fn replay_record(&mut self, text: &str) -> Result<usize, RecordError> {
        self.reset_standard();

        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .skip_while(|(_, line)| line.is_empty())
            .collect();
        let last = lines
            .iter()
            .rposition(|(_, line)| !line.is_empty())
            .ok_or(RecordError::EmptyRecord)?;

        for (index, &(number, line)) in lines[..=last].iter().enumerate() {
            self.replay_round(line, index == last)
                .map_err(|error| RecordError::Line {
                    number,
                    text: line.to_string(),
                    error,
                })?;
        }

        info!(rounds = last + 1, "Record replayed");
        Ok(last + 1)
    }

    fn apply_round(&mut self, line: &str, is_final: bool) -> Result<(), NotationError> {
        let tokens = split_round(line, is_final)?;
        self.apply_recorded_move(tokens.white)?;
        if let Some(black) = tokens.black {
            self.apply_recorded_move(black)?;
        }
        Ok(())
    }

    fn apply_recorded_move(&mut self, token: &str) -> Result<(), NotationError> {
        let recorded = parse_move(token)?;
        let rejected = |cause: GameError| NotationError::Rejected {
            token: token.to_string(),
            cause: Box::new(cause),
        };

        let (first, rest) = match recorded.cells.split_first() {
            Some(split) => split,
            None => return Err(NotationError::TooFewCells(token.to_string())),
        };
        if self.select(*first).map_err(rejected)? == SelectOutcome::Deselected {
            return Err(rejected(
                SelectionError::AlreadyPromptedElsewhere(*first).into(),
            ));
        }

        let mut played = MoveKind::Quiet;
        for cell in rest {
            if self.commit(*cell).map_err(rejected)? == MoveKind::Capture {
                played = MoveKind::Capture;
            }
        }
        if played != recorded.kind {
            return Err(NotationError::KindMismatch {
                token: token.to_string(),
                declared: recorded.kind,
                played,
            });
        }

        self.end_turn().map_err(rejected)
    }
}
