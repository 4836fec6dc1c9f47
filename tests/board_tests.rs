//! Board tests

use termtris::core::{Board, Shape};
use termtris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.can_occupy(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_fits_walls_floor_and_top() {
    let board = Board::new();
    let o = Shape::spawn(PieceKind::O);

    assert!(board.fits(&o, 0, 0));
    assert!(board.fits(&o, 8, 18));
    assert!(!board.fits(&o, -1, 0), "left wall");
    assert!(!board.fits(&o, 9, 0), "right wall");
    assert!(!board.fits(&o, 0, 19), "floor");
    // Hanging above the visible grid is allowed.
    assert!(board.fits(&o, 4, -2));
    assert!(board.fits(&o, 4, -1));
}

#[test]
fn test_fits_ignores_empty_matrix_cells() {
    let mut board = Board::new();
    // I's matrix has empty rows 0, 2 and 3.
    let i = Shape::spawn(PieceKind::I);
    board.set(3, 0, Some(PieceKind::Z));
    board.set(3, 2, Some(PieceKind::Z));
    assert!(board.fits(&i, 3, 0));
    board.set(4, 1, Some(PieceKind::Z));
    assert!(!board.fits(&i, 3, 0));
}

#[test]
fn test_clear_single_row_shifts_above_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::S));
    board.set(7, 10, Some(PieceKind::J));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 11), Some(Some(PieceKind::J)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::I);
    board.set(0, 18, Some(PieceKind::T));
    board.set(0, 16, Some(PieceKind::L));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_four_adjacent_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(9, 15, Some(PieceKind::O));

    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, PieceKind::T);
    }
    assert_eq!(board.clear_full_rows().len(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_lock_shape_writes_kind() {
    let mut board = Board::new();
    let t = Shape::spawn(PieceKind::T);
    assert_eq!(board.lock_shape(&t, 3, 18, PieceKind::T), 4);
    assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
    for x in 3..6 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::T)));
    }
}
