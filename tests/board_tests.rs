//! Board tests - settled grid, imprinting and row removal

use quadris::core::{Board, GameState, PieceQueue, Tetromino};
use quadris::types::{Orientation, PieceKind, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.cols(), BOARD_COLS);
    assert_eq!(board.rows(), BOARD_ROWS);

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            assert!(!board.cell_occupied(row, col), "cell ({row}, {col}) should be empty");
        }
    }
    assert_eq!(board.iter_cells().count(), BOARD_COLS * BOARD_ROWS);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_COLS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_ROWS as i8), None);
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_free(0, BOARD_ROWS as i8));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, true));
    assert_eq!(board.get(5, 10), Some(true));
    assert!(board.cell_occupied(10, 5));
    assert!(!board.is_free(5, 10));

    assert!(board.set(5, 10, false));
    assert_eq!(board.get(5, 10), Some(false));

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, BOARD_ROWS as i8, true));
}

#[test]
fn test_single_full_row_cleared_by_tick() {
    let mut board = Board::new();
    for x in 0..BOARD_COLS as i8 {
        board.set(x, 5, true);
    }
    board.set(2, 0, true);
    board.set(7, 4, true);
    board.set(1, 6, true);

    // Keep the falling piece well away from the rows under test.
    let active = Tetromino::new(PieceKind::O).moved(0, 15);
    let mut game = GameState::from_parts(board, active, PieceQueue::new(1));
    assert_eq!(game.tick(0), None);

    let board = game.board();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert!(board.row(0).iter().all(|&c| !c));
    // Row 0 moved to row 1, row 4 moved to row 5.
    assert!(board.cell_occupied(1, 2));
    assert!(board.cell_occupied(5, 7));
    assert!(!board.cell_occupied(4, 7));
    // Rows below the cleared one stay put.
    assert!(board.cell_occupied(6, 1));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_clear_full_rows_returns_original_indices() {
    let mut board = Board::from_ascii(&[
        "##########",
        "#.#.#.#.#.",
        "##########",
        "##########",
    ]);
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 21, 22]);

    // The partial row sinks to the bottom intact.
    assert_eq!(
        board.row(BOARD_ROWS - 1),
        &[true, false, true, false, true, false, true, false, true, false]
    );
    assert_eq!(board.occupied_count(), 5);
    assert!(board.full_rows().is_empty());
}

#[test]
fn test_imprint_uses_piece_position() {
    let mut board = Board::new();
    let piece = Tetromino {
        kind: PieceKind::T,
        orientation: Orientation::Up,
        x: 3,
        y: 20,
    };
    board.imprint(&piece);

    // T Up: one block on top, three underneath
    assert!(board.cell_occupied(20, 4));
    assert!(board.cell_occupied(21, 3));
    assert!(board.cell_occupied(21, 4));
    assert!(board.cell_occupied(21, 5));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::from_ascii(&["#.#.#", "#####"]);
    assert!(board.occupied_count() > 0);
    board.clear();
    assert_eq!(board, Board::new());
}
