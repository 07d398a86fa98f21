//! Single-ply heuristic move proposer
//!
//! The proposer is greedy: it scores every candidate cell as if the stone
//! were placed there, once for its own side (offense) and once for the
//! opponent (defense), blends the two per difficulty, and picks the best.
//! There is no lookahead and no simulation of the opponent's reply beyond
//! the static defense term.

use tracing::debug;

use crate::board::{Board, Pos, Side, BOARD_SIZE, CENTER};

use super::Difficulty;

/// Direction vectors for line scoring (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Candidates must lie within this Chebyshev distance of an existing stone
const NEIGHBOR_RADIUS: i32 = 2;

/// Stateless move proposer for the computer opponent.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    difficulty: Difficulty,
}

impl Heuristic {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Propose a move for `side`.
    ///
    /// Deterministic: the same board and difficulty always yield the same
    /// move. Ties keep the first candidate in row-major scan order.
    /// Returns `None` only when no empty cell remains.
    pub fn propose(&self, board: &Board, side: Side) -> Option<Pos> {
        let (offense_w, defense_w) = self.difficulty.weights();

        let mut best: Option<(Pos, i64)> = None;
        for pos in candidates(board) {
            let offense = position_score(board, pos, side);
            let defense = position_score(board, pos, side.opponent());
            let score = offense_w * offense + defense_w * defense;

            // Strictly greater keeps the scan-order tie-break deterministic
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(
                row = pos.row,
                col = pos.col,
                score,
                difficulty = self.difficulty.name(),
                "heuristic proposal"
            );
        }
        best.map(|(pos, _)| pos)
    }
}

/// Collect empty cells within [`NEIGHBOR_RADIUS`] of any stone, in row-major
/// order. An entirely empty board yields the center as the sole candidate.
fn candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) && has_neighbor(board, pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

fn has_neighbor(board: &Board, pos: Pos) -> bool {
    for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
        for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if Pos::is_valid(r, c) && !board.is_empty(Pos::new(r as u8, c as u8)) {
                return true;
            }
        }
    }
    false
}

/// Score `pos` as a hypothetical placement for `side`: the sum over the four
/// axes of the run length it would create, penalized by blocked ends.
fn position_score(board: &Board, pos: Pos, side: Side) -> i64 {
    let mut score = 0;
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1u32;
        let mut blocked = 0u32;

        for sign in [1, -1] {
            let mut r = i32::from(pos.row) + dr * sign;
            let mut c = i32::from(pos.col) + dc * sign;
            loop {
                if !Pos::is_valid(r, c) {
                    blocked += 1;
                    break;
                }
                match board.get(Pos::new(r as u8, c as u8)) {
                    Some(s) if s == side => {
                        count += 1;
                        r += dr * sign;
                        c += dc * sign;
                    }
                    Some(_) => {
                        blocked += 1;
                        break;
                    }
                    None => break,
                }
            }
        }

        score += axis_score(count, blocked);
    }
    score
}

/// Per-axis score table: monotonic in run length, penalized by blocked ends,
/// worthless when both ends are blocked.
fn axis_score(count: u32, blocked: u32) -> i64 {
    if blocked >= 2 {
        return 0;
    }
    let open = blocked == 0;
    match count {
        5.. => 100_000,
        4 => {
            if open {
                10_000
            } else {
                1_000
            }
        }
        3 => {
            if open {
                1_000
            } else {
                100
            }
        }
        2 => {
            if open {
                100
            } else {
                10
            }
        }
        _ => {
            if open {
                10
            } else {
                1
            }
        }
    }
}
