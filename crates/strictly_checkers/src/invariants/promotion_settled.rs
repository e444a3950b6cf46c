//! Promotion invariant: crowning is never left pending.

use super::super::rules::reaches_promotion_row;
use super::super::{Game, Team};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: no simple piece rests on its promotion row.
///
/// Promotion runs after every commit, so a simple piece on the far rank
/// means a crowning was skipped.
pub struct PromotionSettledInvariant;

impl Invariant<Game> for PromotionSettledInvariant {
    fn holds(game: &Game) -> bool {
        Team::iter().all(|team| {
            game.board()
                .pieces(team)
                .all(|(pos, piece)| piece.is_king() || !reaches_promotion_row(piece, pos))
        })
    }

    fn description() -> &'static str {
        "Simple pieces on their promotion row are crowned"
    }
}
