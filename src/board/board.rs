//! Board structure: two bitboards plus occupancy queries
//!
//! The board knows nothing about turn order, clocks or win state; it only
//! stores stones and refuses to overwrite an occupied cell.

use crate::error::GameError;

use super::bitboard::Bitboard;
use super::{Pos, Side, TOTAL_CELLS};

/// Game board for one game of five-in-a-row
#[derive(Debug, Clone, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get the side occupying a position, if any
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Side> {
        if self.black.get(pos) {
            Some(Side::Black)
        } else if self.white.get(pos) {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone. Rejects occupied cells without mutating anything.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        match side {
            Side::Black => self.black.set(pos),
            Side::White => self.white.set(pos),
        }
        Ok(())
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, side: Side) -> &Bitboard {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if no stone has been placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied (drawn game when nobody has won)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}
