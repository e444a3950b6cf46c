//! Paired rounds invariant: the log only ever has one open round.

use super::super::Game;
use super::Invariant;

/// Invariant: every round except the last holds both a white and a black turn.
pub struct PairedRoundsInvariant;

impl Invariant<Game> for PairedRoundsInvariant {
    fn holds(game: &Game) -> bool {
        let rounds = game.log().rounds();
        match rounds.split_last() {
            None => true,
            Some((_, earlier)) => earlier.iter().all(|round| round.is_complete()),
        }
    }

    fn description() -> &'static str {
        "Only the last round may be missing a turn"
    }
}
