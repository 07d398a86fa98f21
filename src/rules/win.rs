//! Win condition checking
//!
//! A move wins when the placed stone completes five or more in a row along
//! any of the four axes. Overlines (6+) count as wins; there is no
//! "exactly five" restriction.

use crate::board::{Board, Pos, Side, BOARD_SIZE};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the stone just placed at `pos` completes five-in-a-row.
///
/// Counts outward from the new stone in both directions of each axis,
/// stopping at a board edge or a cell not occupied by `side`. Must be
/// called on the board state *after* placement, for the side that moved.
#[inline]
pub fn is_win_at(board: &Board, pos: Pos, side: Side) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        if count_line(board, pos, dr, dc, side) >= 5 {
            return true;
        }
    }
    false
}

/// Total run length through `pos` along one axis, including the stone at `pos`.
fn count_line(board: &Board, pos: Pos, dr: i32, dc: i32, side: Side) -> u32 {
    let mut count = 1;
    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Some(side) {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
    }
    count
}

/// Find five cells of the winning line through `pos`, if one exists.
///
/// Used only for highlighting the finished line; returns the first five
/// positions of the run in board order.
pub fn winning_line(board: &Board, pos: Pos, side: Side) -> Option<[Pos; 5]> {
    for &(dr, dc) in &DIRECTIONS {
        let mut line = Vec::with_capacity(BOARD_SIZE);

        // Walk to the start of the run, then collect forward
        let mut r = i32::from(pos.row);
        let mut c = i32::from(pos.col);
        while Pos::is_valid(r - dr, c - dc)
            && board.get(Pos::new((r - dr) as u8, (c - dc) as u8)) == Some(side)
        {
            r -= dr;
            c -= dc;
        }
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Some(side) {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= 5 {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(positions: &[(u8, u8)], side: Side) -> Board {
        let mut board = Board::new();
        for &(r, c) in positions {
            board.place(Pos::new(r, c), side).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_five() {
        let board = board_with_line(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], Side::Black);
        assert!(is_win_at(&board, Pos::new(7, 5), Side::Black));
        assert!(!is_win_at(&board, Pos::new(7, 5), Side::White));
    }

    #[test]
    fn test_vertical_five() {
        let board = board_with_line(&[(3, 9), (4, 9), (5, 9), (6, 9), (7, 9)], Side::White);
        assert!(is_win_at(&board, Pos::new(7, 9), Side::White));
    }

    #[test]
    fn test_diagonal_se_five() {
        let board = board_with_line(&[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], Side::Black);
        assert!(is_win_at(&board, Pos::new(4, 4), Side::Black));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let board = board_with_line(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Side::White);
        assert!(is_win_at(&board, Pos::new(6, 6), Side::White));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with_line(&[(7, 3), (7, 4), (7, 5), (7, 6)], Side::Black);
        assert!(!is_win_at(&board, Pos::new(7, 6), Side::Black));
    }

    #[test]
    fn test_overline_wins() {
        let board = board_with_line(
            &[(9, 2), (9, 3), (9, 4), (9, 5), (9, 6), (9, 7)],
            Side::Black,
        );
        // Six in a row counts, checked from an interior stone
        assert!(is_win_at(&board, Pos::new(9, 4), Side::Black));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        // Gap at (7, 5)
        let board = board_with_line(&[(7, 2), (7, 3), (7, 4), (7, 6), (7, 7)], Side::Black);
        assert!(!is_win_at(&board, Pos::new(7, 4), Side::Black));
        assert!(!is_win_at(&board, Pos::new(7, 6), Side::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_count() {
        let mut board = board_with_line(&[(7, 2), (7, 3), (7, 4), (7, 6), (7, 7)], Side::Black);
        board.place(Pos::new(7, 5), Side::White).unwrap();
        assert!(!is_win_at(&board, Pos::new(7, 4), Side::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let board = board_with_line(&[(14, 0), (14, 1), (14, 2), (14, 3), (14, 4)], Side::Black);
        assert!(is_win_at(&board, Pos::new(14, 4), Side::Black));
    }

    #[test]
    fn test_five_at_corner_diagonal() {
        let board = board_with_line(
            &[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)],
            Side::White,
        );
        assert!(is_win_at(&board, Pos::new(14, 14), Side::White));
    }

    #[test]
    fn test_row_zero_scenario() {
        // Black five at row 0, columns 0-4; check from the last placed stone
        let board = board_with_line(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Side::Black);
        assert!(is_win_at(&board, Pos::new(0, 4), Side::Black));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_with_line(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], Side::Black);
        let line = winning_line(&board, Pos::new(7, 5), Side::Black).unwrap();
        assert_eq!(
            line,
            [
                Pos::new(7, 3),
                Pos::new(7, 4),
                Pos::new(7, 5),
                Pos::new(7, 6),
                Pos::new(7, 7)
            ]
        );
    }

    #[test]
    fn test_winning_line_none_for_four() {
        let board = board_with_line(&[(7, 3), (7, 4), (7, 5), (7, 6)], Side::Black);
        assert!(winning_line(&board, Pos::new(7, 5), Side::Black).is_none());
    }
}
