//! Board tests - grid storage, collision and row clearing

use blockfall::core::{geometry, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn occupied_rows(board: &Board) -> Vec<String> {
    board
        .occupancy()
        .iter()
        .map(|row| row.iter().map(|&o| if o { '#' } else { '.' }).collect())
        .collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_custom_size() {
    let board = Board::new(6, 8);
    assert_eq!(board.cells().len(), 48);
    assert_eq!(board.occupancy().len(), 8);
    assert!(board.occupancy().iter().all(|row| row.len() == 6));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i32, Some(PieceKind::T)));
}

#[test]
fn test_space_above_board_is_free() {
    let board = Board::default();
    assert!(board.in_bounds(0, -3));
    assert!(!board.is_occupied(0, -3));
    assert!(!board.in_bounds(-1, -3));
    assert!(!board.in_bounds(0, BOARD_HEIGHT as i32));
}

#[test]
fn test_collides_with_walls_floor_and_cells() {
    let mut board = Board::default();
    let t = geometry(PieceKind::T, 0);

    assert!(!board.collides(t, (5, 0)));
    // Left wall, right wall, floor.
    assert!(board.collides(t, (0, 5)));
    assert!(board.collides(t, (9, 5)));
    assert!(board.collides(t, (5, 20)));

    board.set(6, 10, Some(PieceKind::O));
    assert!(board.collides(t, (5, 10)));
    assert!(!board.collides(t, (5, 12)));
}

#[test]
fn test_lock_drops_cells_above_board() {
    let mut board = Board::default();
    // Vertical I spans y-1..y+2.
    board.lock(geometry(PieceKind::I, 1), (3, -1), PieceKind::I);

    assert_eq!(board.get(3, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(3, 1), Some(Some(PieceKind::I)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_on_empty_board_returns_zero() {
    let mut board = Board::default();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::from_rows(&[
        "....", //
        ".T..", //
        "IIII", //
    ]);
    assert!(board.is_row_full(2));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(occupied_rows(&board), vec!["....", "....", ".#.."]);
    assert_eq!(board.get(1, 2), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::from_rows(&[
        "....", //
        "J...", //
        "IIII", //
        ".L..", //
        "OOOO", //
    ]);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(
        occupied_rows(&board),
        vec!["....", "....", "....", "#...", ".#.."]
    );
    assert_eq!(board.get(0, 3), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 4), Some(Some(PieceKind::L)));
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut rows = vec![".........."; 16];
    rows.push("S.........");
    rows.extend(["IIIIIIIIII"; 3]);
    let mut board = Board::from_rows(&rows);

    assert_eq!(board.clear_full_rows(), 3);
    assert!(board.is_occupied(0, 19));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_full_board_clears_to_empty() {
    let mut board = Board::from_rows(&["ZZZ", "ZZZ", "ZZZ", "ZZZ"]);
    assert_eq!(board.clear_full_rows(), 4);
    assert!(board.cells().iter().all(Option::is_none));
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::from_rows(&["I.", ".I"]);
    board.clear();
    assert!(board.cells().iter().all(Option::is_none));
}
