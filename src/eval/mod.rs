//! Move evaluation for the computer opponent

pub mod heuristic;

pub use heuristic::Heuristic;

use serde::{Deserialize, Serialize};

/// Computer opponent strength. Selects the blend of offense and defense
/// weights used by [`Heuristic`]; it does not change the scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// (offense, defense) weights, scaled by 10 to stay in integers.
    /// Easy plays loose, Hard presses the attack while still defending.
    pub(crate) fn weights(self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (7, 3),
            Difficulty::Medium => (10, 10),
            Difficulty::Hard => (12, 10),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
