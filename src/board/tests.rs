use super::*;
use crate::error::GameError;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(CENTER, Pos::new(7, 7));
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_bitboard_set_get_clear() {
    let mut bb = Bitboard::new();
    let pos = Pos::new(3, 12);
    assert!(!bb.get(pos));

    bb.set(pos);
    assert!(bb.get(pos));
    assert_eq!(bb.count(), 1);

    bb.clear(pos);
    assert!(!bb.get(pos));
    assert!(bb.is_empty());
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(0, 0));
    bb.set(Pos::new(7, 7));
    bb.set(Pos::new(14, 14));

    let positions: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(
        positions,
        vec![Pos::new(0, 0), Pos::new(7, 7), Pos::new(14, 14)]
    );
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place(Pos::new(7, 7), Side::Black).unwrap();
    assert_eq!(board.get(Pos::new(7, 7)), Some(Side::Black));
    assert_eq!(board.get(Pos::new(7, 8)), None);
    assert!(!board.is_empty(Pos::new(7, 7)));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_rejects_occupied_cell() {
    let mut board = Board::new();
    board.place(Pos::new(5, 5), Side::Black).unwrap();

    let err = board.place(Pos::new(5, 5), Side::White).unwrap_err();
    assert_eq!(err, GameError::CellOccupied { row: 5, col: 5 });
    // Original stone untouched
    assert_eq!(board.get(Pos::new(5, 5)), Some(Side::Black));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_board_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    // Fill all cells, alternating colors by index parity
    for idx in 0..TOTAL_CELLS {
        let side = if idx % 2 == 0 { Side::Black } else { Side::White };
        board.place(Pos::from_index(idx), side).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_board_stones_per_side() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Side::Black).unwrap();
    board.place(Pos::new(0, 1), Side::White).unwrap();
    board.place(Pos::new(0, 2), Side::Black).unwrap();

    assert_eq!(board.stones(Side::Black).count(), 2);
    assert_eq!(board.stones(Side::White).count(), 1);
}
