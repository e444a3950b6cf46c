//! Tests for the checkers turn controller.

use strictly_checkers::{
    Board, Cell, EndTurnError, Game, GameError, Highlight, MoveKind, Phase, Piece, PieceKind,
    Position, SelectOutcome, SelectionError, Team,
};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

fn board_with(pieces: &[(u8, u8, Piece)]) -> Board {
    let mut board = Board::new();
    for &(row, col, piece) in pieces {
        board.set(pos(row, col), Cell::Occupied(piece));
    }
    board
}

#[test]
fn test_opening_round() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Team::White);

    assert_eq!(game.select(pos(5, 0)), Ok(SelectOutcome::Selected));
    let targets: Vec<Position> = game
        .candidates()
        .unwrap()
        .iter()
        .map(|c| c.destination)
        .collect();
    assert_eq!(targets, vec![pos(4, 1)]);
    assert_eq!(game.commit(pos(4, 1)), Ok(MoveKind::Quiet));
    game.end_turn().unwrap();
    assert_eq!(game.to_move(), Team::Black);

    game.select(pos(2, 1)).unwrap();
    assert_eq!(game.highlight(pos(3, 0)), Highlight::ReachableQuiet);
    assert_eq!(game.highlight(pos(3, 2)), Highlight::ReachableQuiet);
    game.commit(pos(3, 2)).unwrap();
    game.end_turn().unwrap();

    assert_eq!(game.to_move(), Team::White);
    assert_eq!(game.log().to_string(), "1. a3-b4 b6-c5");
    assert_eq!(game.board().count(Team::White), 12);
    assert_eq!(game.board().count(Team::Black), 12);
}

#[test]
fn test_opponent_piece_cannot_be_selected() {
    let mut game = Game::new();
    assert_eq!(
        game.select(pos(2, 1)),
        Err(GameError::IllegalSelection(SelectionError::NotYourPiece(pos(2, 1))))
    );
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_capture_chain() {
    let board = board_with(&[
        (3, 4, Piece::simple(Team::White)),
        (2, 3, Piece::simple(Team::Black)),
        (2, 1, Piece::simple(Team::Black)),
        (0, 7, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board, Team::White);
    assert_eq!(game.must_move().positions(), &[pos(3, 4)]);

    game.select(pos(3, 4)).unwrap();
    assert_eq!(game.commit(pos(1, 2)), Ok(MoveKind::Capture));
    assert_eq!(game.phase(), Phase::MidCapture);
    assert!(game.board().is_empty(pos(2, 3)));
    assert_eq!(game.highlight(pos(3, 0)), Highlight::ReachableRequired);

    assert_eq!(
        game.select(pos(1, 2)),
        Err(GameError::IllegalSelection(SelectionError::ChainInProgress))
    );
    assert_eq!(
        game.end_turn(),
        Err(GameError::PrematureEndTurn(EndTurnError::CaptureChainUnfinished))
    );

    assert_eq!(game.commit(pos(3, 0)), Ok(MoveKind::Capture));
    assert_eq!(game.phase(), Phase::TurnComplete);
    game.end_turn().unwrap();

    assert_eq!(game.log().to_string(), "1. e5:c7:a5");
    assert_eq!(game.board().count(Team::Black), 1);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_cancel_mid_chain_restores_position() {
    let board = board_with(&[
        (3, 4, Piece::simple(Team::White)),
        (2, 3, Piece::simple(Team::Black)),
        (2, 1, Piece::simple(Team::Black)),
        (0, 7, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board.clone(), Team::White);
    game.select(pos(3, 4)).unwrap();
    game.commit(pos(1, 2)).unwrap();

    game.cancel_turn().unwrap();
    assert_eq!(game.board(), &board);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.to_move(), Team::White);
    assert!(game.current_turn().is_none());
    assert!(game.log().is_empty());
}

#[test]
fn test_cancel_after_full_chain_restores_position() {
    let board = board_with(&[
        (3, 4, Piece::simple(Team::White)),
        (2, 3, Piece::simple(Team::Black)),
        (2, 1, Piece::simple(Team::Black)),
        (0, 7, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board.clone(), Team::White);
    game.select(pos(3, 4)).unwrap();
    game.commit(pos(1, 2)).unwrap();
    game.commit(pos(3, 0)).unwrap();
    assert_eq!(game.phase(), Phase::TurnComplete);
    assert_eq!(game.board().count(Team::Black), 1);

    game.cancel_turn().unwrap();
    assert_eq!(game.board(), &board);
    assert_eq!(game.board().count(Team::Black), 3);
    assert_eq!(game.must_move().positions(), &[pos(3, 4)]);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_cancel_after_mid_chain_promotion_uncrowns() {
    let board = board_with(&[
        (2, 3, Piece::simple(Team::White)),
        (1, 2, Piece::simple(Team::Black)),
        (3, 4, Piece::simple(Team::Black)),
        (6, 1, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board.clone(), Team::White);
    game.select(pos(2, 3)).unwrap();
    game.commit(pos(0, 1)).unwrap();
    game.commit(pos(4, 5)).unwrap();
    assert_eq!(game.board().piece_at(pos(4, 5)), Some(Piece::king(Team::White)));

    game.cancel_turn().unwrap();
    assert_eq!(game.board(), &board);
    assert_eq!(game.board().piece_at(pos(2, 3)), Some(Piece::simple(Team::White)));
}

#[test]
fn test_cancel_after_quiet_move() {
    let mut game = Game::new();
    game.select(pos(5, 2)).unwrap();
    game.commit(pos(4, 3)).unwrap();
    game.cancel_turn().unwrap();
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.cancel_turn(), Err(GameError::NothingToCancel));
}

#[test]
fn test_promotion() {
    let board = board_with(&[
        (1, 2, Piece::simple(Team::White)),
        (6, 7, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board, Team::White);
    game.select(pos(1, 2)).unwrap();
    game.commit(pos(0, 1)).unwrap();
    assert_eq!(game.phase(), Phase::TurnComplete);
    game.end_turn().unwrap();

    let piece = game.board().piece_at(pos(0, 1)).unwrap();
    assert_eq!(piece.kind, PieceKind::King);
    assert_eq!(game.log().to_string(), "1. c7-b8");
}

#[test]
fn test_black_crowned_piece_slides_next_turn() {
    let board = board_with(&[
        (6, 1, Piece::simple(Team::Black)),
        (2, 7, Piece::simple(Team::White)),
    ]);
    let mut game = Game::from_board(board, Team::Black);
    game.select(pos(6, 1)).unwrap();
    game.commit(pos(7, 2)).unwrap();
    assert_eq!(game.board().piece_at(pos(7, 2)), Some(Piece::king(Team::Black)));
    game.end_turn().unwrap();

    game.select(pos(2, 7)).unwrap();
    game.commit(pos(1, 6)).unwrap();
    game.end_turn().unwrap();

    game.select(pos(7, 2)).unwrap();
    let candidates = game.candidates().unwrap();
    assert_eq!(candidates.len(), 7);
    assert!(candidates.find(pos(4, 5)).is_some());
    assert!(candidates.find(pos(2, 7)).is_some());
}

#[test]
fn test_king_moves_any_distance() {
    let board = board_with(&[
        (7, 0, Piece::king(Team::White)),
        (0, 1, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board, Team::White);
    game.select(pos(7, 0)).unwrap();
    assert_eq!(game.candidates().unwrap().len(), 7);
    game.commit(pos(2, 5)).unwrap();
    game.end_turn().unwrap();
    assert_eq!(game.log().to_string(), "1. a1-f6");
}

#[test]
fn test_win_when_last_piece_captured() {
    let board = board_with(&[
        (5, 2, Piece::simple(Team::White)),
        (3, 4, Piece::simple(Team::Black)),
    ]);
    let mut game = Game::from_board(board, Team::White);
    game.select(pos(5, 2)).unwrap();
    game.commit(pos(4, 3)).unwrap();
    game.end_turn().unwrap();
    assert_eq!(game.winner(), None);

    game.select(pos(3, 4)).unwrap();
    assert_eq!(game.commit(pos(5, 2)), Ok(MoveKind::Capture));
    game.end_turn().unwrap();

    assert_eq!(game.winner(), Some(Team::Black));
    assert_eq!(game.board().count(Team::White), 0);
    assert_eq!(game.log().to_string(), "1. c3-d4 e5:c3");
}

#[test]
fn test_forced_capture_blocks_other_pieces() {
    let mut game = Game::new();
    game.replay_round("1. c3-d4 f6-e5", false).unwrap();
    assert_eq!(game.must_move().positions(), &[pos(4, 3)]);

    assert_eq!(
        game.select(pos(5, 0)),
        Err(GameError::IllegalSelection(SelectionError::MustCaptureElsewhere(pos(5, 0))))
    );

    game.select(pos(4, 3)).unwrap();
    let candidates = game.candidates().unwrap();
    assert_eq!(candidates.len(), 1);
    assert!(candidates.iter().all(|c| c.captured == Some(pos(3, 4))));
}

#[test]
fn test_example_position() {
    let game = Game::example();
    assert_eq!(game.to_move(), Team::White);
    assert_eq!(game.board().count(Team::White), 2);
    assert_eq!(game.board().count(Team::Black), 6);
    assert_eq!(game.board().piece_at(pos(7, 2)), Some(Piece::king(Team::Black)));
}
