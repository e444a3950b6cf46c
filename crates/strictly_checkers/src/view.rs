//! Serializable snapshot of a session for front ends.

use super::action::Candidate;
use super::board::Board;
use super::game::{Game, Phase};
use super::position::Position;
use super::types::Team;
use serde::{Deserialize, Serialize};

/// The selected piece and where it may go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    /// Selected piece, or the capturing piece mid-chain.
    pub from: Position,
    /// Destinations in generation order.
    pub candidates: Vec<Candidate>,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board contents.
    pub board: Board,
    /// Side to move.
    pub to_move: Team,
    /// Current turn phase.
    pub phase: Phase,
    /// Active selection, if any.
    pub selection: Option<SelectionView>,
    /// Pieces that must capture this turn.
    pub must_move: Vec<Position>,
    /// Round lines in notation.
    pub log: Vec<String>,
    /// Winner, once decided.
    pub winner: Option<Team>,
}

impl GameView {
    /// Serializes the view as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let selection = game
            .selected()
            .zip(game.candidates())
            .map(|(from, set)| SelectionView {
                from,
                candidates: set.iter().copied().collect(),
            });
        Self {
            board: game.board().clone(),
            to_move: game.to_move(),
            phase: game.phase(),
            selection,
            must_move: game.must_move().positions().to_vec(),
            log: game.log().lines(),
            winner: game.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_tracks_selection() {
        let mut game = Game::new();
        game.select(Position::new(5, 2).unwrap()).unwrap();
        let view = GameView::from(&game);
        assert_eq!(view.phase, Phase::Selecting);
        let selection = view.selection.unwrap();
        assert_eq!(selection.from, Position::new(5, 2).unwrap());
        assert_eq!(selection.candidates.len(), 2);
    }

    #[test]
    fn test_view_serializes() {
        let json = GameView::from(&Game::new()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["to_move"], "white");
        assert_eq!(value["phase"], "Idle");
        assert!(value["selection"].is_null());
    }

    #[test]
    fn test_view_rejects_off_board_positions() {
        let mut game = Game::new();
        game.replay_round("1. c3-d4 f6-e5", false).unwrap();
        let json = GameView::from(&game).to_json().unwrap();
        let parsed: GameView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, GameView::from(&game));

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["must_move"][0]["row"] = serde_json::json!(12);
        assert!(serde_json::from_value::<GameView>(value).is_err());
    }
}
