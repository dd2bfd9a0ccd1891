use quadris::core::{Board, GameState, PieceQueue, Tetromino};
use quadris::input::handle_key_event;
use quadris::term::{encode_frame, GameView, Viewport};
use quadris::types::{PieceKind, BOARD_ROWS};

use crossterm::event::{KeyCode, KeyEvent};

#[test]
fn term_view_draws_well_border() {
    let view = GameView::new(2);
    let vp = Viewport::new(54, 25);
    let fb = view.render(&GameState::new(1), vp);
    let (bx, by) = view.layout(vp).board;

    // 10 cells of 2 columns plus the border
    assert_eq!(fb.get(bx, by).unwrap().ch, '┌');
    assert_eq!(fb.get(bx + 21, by).unwrap().ch, '┐');
    assert_eq!(fb.get(bx, by + BOARD_ROWS as u16 + 1).unwrap().ch, '└');
    assert_eq!(fb.get(bx + 21, by + BOARD_ROWS as u16 + 1).unwrap().ch, '┘');
}

#[test]
fn term_view_tracks_key_driven_moves() {
    let view = GameView::new(2);
    let vp = Viewport::new(54, 25);
    let mut game = GameState::from_parts(
        Board::new(),
        Tetromino::new(PieceKind::O),
        PieceQueue::new(4),
    );
    let (bx, by) = view.layout(vp).board;

    // O faces up with its blocks in box columns 1 and 2.
    let before = view.render(&game, vp);
    assert_eq!(before.get(bx + 1 + 2, by + 1).unwrap().ch, '█');

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('l'))).unwrap();
    game.apply_action(action);

    let after = view.render(&game, vp);
    assert_eq!(after.get(bx + 1 + 2, by + 1).unwrap().ch, '·');
    assert_eq!(after.get(bx + 1 + 4, by + 1).unwrap().ch, '█');
    assert_eq!(after.get(bx + 1 + 6, by + 1).unwrap().ch, '█');
}

#[test]
fn term_diff_is_smaller_than_full_repaint() {
    let view = GameView::default();
    let vp = Viewport::new(60, 30);
    let mut game = GameState::new(5);

    let first = view.render(&game, vp);
    game.tick(200);
    let second = view.render(&game, vp);

    let mut full = Vec::new();
    encode_frame(None, &second, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_frame(Some(&first), &second, &mut diff).unwrap();
    assert!(diff.len() < full.len());

    let mut unchanged = Vec::new();
    encode_frame(Some(&second), &second.clone(), &mut unchanged).unwrap();
    assert!(unchanged.len() < diff.len());
}
