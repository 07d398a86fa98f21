//! Five-in-a-row game core with a heuristic computer opponent
//!
//! A complete rules engine for two-player five-in-a-row on a 15x15 board:
//! move legality, win/draw detection, a per-move clock with pause/resume,
//! timeout forfeits, surrender, and a single-ply heuristic opponent with
//! three difficulty levels.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection from a just-placed stone
//! - [`clock`]: Elapsed time and the per-move countdown
//! - [`eval`]: Heuristic move proposer for the computer side
//! - [`engine`]: The authoritative turn/clock state machine
//! - [`error`]: Typed rejections for invalid operations
//!
//! [`Game`] is the single source of truth: it owns the board and the clock,
//! validates every inbound operation, and rejects invalid ones with a
//! [`GameError`] without mutating state. The UI shell renders from
//! [`Snapshot`] and never touches the board directly. Rendering, input
//! wiring and dialogs are out of scope; the shell drives the core through
//! the inbound calls and a periodic [`Game::tick`].
//!
//! # Quick Start
//!
//! ```
//! use std::time::Instant;
//! use fiverow::{Game, GameConfig, GamePhase, Side};
//!
//! let mut game = Game::new(GameConfig::default());
//! game.start(Instant::now()).unwrap();
//!
//! // Black opens at the center
//! let applied = game.apply_human_move(7, 7, Instant::now()).unwrap();
//! assert_eq!(applied.side, Side::Black);
//! assert_eq!(game.phase(), GamePhase::InProgress);
//!
//! let snapshot = game.snapshot(Instant::now());
//! assert_eq!(snapshot.active_side, Side::White);
//! ```

pub mod board;
pub mod clock;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, BOARD_SIZE};
pub use clock::GameClock;
pub use engine::{
    AppliedMove, Game, GameConfig, GameMode, GamePhase, Outcome, Snapshot, TickEvent,
};
pub use error::GameError;
pub use eval::{Difficulty, Heuristic};
