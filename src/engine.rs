//! Turn engine: the authoritative state machine for one game
//!
//! [`Game`] owns the board and the clock and is their sole mutator. Every
//! state change happens through a discrete operation: an inbound call from
//! the UI shell (`start`, `apply_human_move`, `pause`, `resume`,
//! `surrender`, `restart`) or the periodic [`Game::tick`]. The tick is the
//! single cooperative scheduler: it polls the move clock for timeouts and
//! drives the delayed computer move. Pause and restart cancel the pending
//! move, so a stale computer move can never fire after a phase change.
//!
//! Computer proposals are fed back through the same placement path as human
//! moves; there is no special case.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use fiverow::{Difficulty, Game, GameConfig, GameMode, GamePhase, Side};
//!
//! let config = GameConfig {
//!     mode: GameMode::Pve {
//!         human_side: Side::Black,
//!         difficulty: Difficulty::Medium,
//!     },
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(config);
//! game.start(Instant::now()).unwrap();
//!
//! game.apply_human_move(7, 7, Instant::now()).unwrap();
//! // The computer's reply is applied by a later tick()
//! assert_eq!(game.phase(), GamePhase::InProgress);
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Pos, Side, TOTAL_CELLS};
use crate::clock::{GameClock, DEFAULT_MOVE_LIMIT};
use crate::error::GameError;
use crate::eval::{Difficulty, Heuristic};
use crate::rules::{is_win_at, winning_line};

/// Who controls the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the board
    Pvp,
    /// Human vs computer
    Pve {
        human_side: Side,
        difficulty: Difficulty,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Pvp
    }
}

impl GameMode {
    /// The computer-controlled side, if any
    #[inline]
    pub fn computer_side(self) -> Option<Side> {
        match self {
            GameMode::Pvp => None,
            GameMode::Pve { human_side, .. } => Some(human_side.opponent()),
        }
    }
}

/// Lifecycle of one game.
///
/// `NotStarted -> InProgress <-> Paused -> Finished`. Finished has no
/// outgoing transition; `restart` rebuilds the machine wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Paused,
    Finished,
}

/// How a finished game ended. Set exactly once, at the transition into
/// `Finished`. The side carried by `Timeout` and `Surrender` is the loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
    Timeout(Side),
    Surrender(Side),
}

impl Outcome {
    /// The winning side, `None` for a draw
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            Outcome::Draw => None,
            Outcome::Timeout(loser) | Outcome::Surrender(loser) => Some(loser.opponent()),
        }
    }
}

/// Configuration accepted at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Per-move time limit
    pub move_limit: Duration,
    /// Ticks between a computer turn beginning and its move being applied,
    /// the "thinking time" delay. Purely cosmetic; minimum one tick.
    pub ai_delay_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            move_limit: DEFAULT_MOVE_LIMIT,
            ai_delay_ticks: 1,
        }
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub pos: Pos,
    pub side: Side,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// What a tick observed, for the shell to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The active side ran out of move time and loses
    TimedOut(Side),
    /// The scheduled computer move was applied
    AiMoved(AppliedMove),
}

/// Read-only view of the game for the UI shell.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Row-major cell contents, `TOTAL_CELLS` entries
    pub cells: Vec<Option<Side>>,
    pub active_side: Side,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    /// Seconds left on the current move; negative past the deadline
    pub remaining_move_secs: f64,
    /// Whole seconds of game time, excluding pauses
    pub elapsed_secs: u64,
    /// Most recent placement, for highlighting only
    pub last_move: Option<Pos>,
    /// The finished five when the game ended by five-in-a-row
    pub winning_line: Option<[Pos; 5]>,
    pub black_stones: u32,
    pub white_stones: u32,
}

/// The turn engine for one game.
pub struct Game {
    config: GameConfig,
    board: Board,
    clock: Option<GameClock>,
    phase: GamePhase,
    active_side: Side,
    outcome: Option<Outcome>,
    last_move: Option<Pos>,
    win_line: Option<[Pos; 5]>,
    history: Vec<(Pos, Side)>,
    ai: Option<Heuristic>,
    /// Ticks remaining until the scheduled computer move fires
    pending_ai: Option<u32>,
}

impl Game {
    /// Create a game in `NotStarted`. In `Pve` mode the heuristic evaluator
    /// is built from the configured difficulty.
    pub fn new(config: GameConfig) -> Self {
        let ai = match config.mode {
            GameMode::Pve { difficulty, .. } => Some(Heuristic::new(difficulty)),
            GameMode::Pvp => None,
        };
        Self::with_evaluator(config, ai)
    }

    /// Create a game with an explicit evaluator slot. A `Pve` game without
    /// an evaluator rejects the computer's turn with `AiUnavailable`.
    pub fn with_evaluator(config: GameConfig, ai: Option<Heuristic>) -> Self {
        Self {
            config,
            board: Board::new(),
            clock: None,
            phase: GamePhase::NotStarted,
            active_side: Side::Black,
            outcome: None,
            last_move: None,
            win_line: None,
            history: Vec::new(),
            ai,
            pending_ai: None,
        }
    }

    /// `NotStarted -> InProgress`: fresh board and clock, Black to move.
    pub fn start(&mut self, now: Instant) -> Result<(), GameError> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::WrongPhase {
                expected: GamePhase::NotStarted,
                actual: self.phase,
            });
        }
        self.begin(now);
        Ok(())
    }

    /// Discard the current game and begin a new one. Allowed from any
    /// phase; cancels any pending computer move so a stale proposal can
    /// never land on the new board.
    pub fn restart(&mut self, now: Instant) {
        self.board = Board::new();
        self.outcome = None;
        self.last_move = None;
        self.win_line = None;
        self.history.clear();
        self.pending_ai = None;
        self.begin(now);
    }

    fn begin(&mut self, now: Instant) {
        self.clock = Some(GameClock::start(self.config.move_limit, now));
        self.phase = GamePhase::InProgress;
        self.active_side = Side::Black;
        info!(mode = ?self.config.mode, "game started");
        // Computer may hold Black and open the game
        self.schedule_ai_if_due();
    }

    /// Apply a move for the human player at raw board coordinates.
    ///
    /// Rejections (`WrongPhase`, `NotActiveSide`, `OutOfBounds`,
    /// `CellOccupied`) leave the board and phase untouched.
    pub fn apply_human_move(
        &mut self,
        row: i32,
        col: i32,
        now: Instant,
    ) -> Result<AppliedMove, GameError> {
        self.ensure_in_progress()?;
        if let Some(computer) = self.config.mode.computer_side() {
            if self.active_side == computer {
                return Err(GameError::NotActiveSide {
                    side: computer.opponent(),
                });
            }
        }
        if !Pos::is_valid(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        self.apply_move(Pos::new(row as u8, col as u8), now)
    }

    /// Place a stone for the active side and run the post-move checks.
    /// Shared by human moves and scheduled computer moves.
    fn apply_move(&mut self, pos: Pos, now: Instant) -> Result<AppliedMove, GameError> {
        let side = self.active_side;
        self.board.place(pos, side)?;
        self.history.push((pos, side));
        self.last_move = Some(pos);
        debug!(row = pos.row, col = pos.col, ?side, "move applied");

        if is_win_at(&self.board, pos, side) {
            self.win_line = winning_line(&self.board, pos, side);
            self.finish(Outcome::Win(side), now);
        } else if self.board.is_full() {
            self.finish(Outcome::Draw, now);
        } else {
            self.active_side = side.opponent();
            if let Some(clock) = self.clock.as_mut() {
                clock.on_move_applied(now);
            }
            self.schedule_ai_if_due();
        }

        Ok(AppliedMove {
            pos,
            side,
            outcome: self.outcome,
        })
    }

    /// Poll the clock and the pending computer move. Called on a fixed
    /// cadence by the shell; a no-op outside `InProgress`.
    pub fn tick(&mut self, now: Instant) -> Result<Option<TickEvent>, GameError> {
        if self.phase != GamePhase::InProgress {
            return Ok(None);
        }

        let remaining = self
            .clock
            .as_ref()
            .map_or(f64::INFINITY, |clock| clock.remaining_move(now));
        if remaining <= 0.0 {
            let loser = self.active_side;
            self.finish(Outcome::Timeout(loser), now);
            return Ok(Some(TickEvent::TimedOut(loser)));
        }

        if let Some(ticks) = self.pending_ai {
            let remaining_ticks = ticks.saturating_sub(1);
            if remaining_ticks > 0 {
                self.pending_ai = Some(remaining_ticks);
                return Ok(None);
            }
            self.pending_ai = None;
            let ai = self.ai.as_ref().ok_or(GameError::AiUnavailable)?;
            // A full board has already ended the game on the draw path, so
            // the heuristic always has a cell to offer here.
            if let Some(pos) = ai.propose(&self.board, self.active_side) {
                let applied = self.apply_move(pos, now)?;
                return Ok(Some(TickEvent::AiMoved(applied)));
            }
        }

        Ok(None)
    }

    /// `InProgress -> Paused`. Cancels the pending computer move.
    pub fn pause(&mut self, now: Instant) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.phase = GamePhase::Paused;
        self.pending_ai = None;
        if let Some(clock) = self.clock.as_mut() {
            clock.pause(now);
        }
        info!("game paused");
        Ok(())
    }

    /// `Paused -> InProgress`. Restores the exact remaining move time and
    /// reschedules the computer move if it is the computer's turn.
    pub fn resume(&mut self, now: Instant) -> Result<(), GameError> {
        if self.phase != GamePhase::Paused {
            return Err(GameError::WrongPhase {
                expected: GamePhase::Paused,
                actual: self.phase,
            });
        }
        self.phase = GamePhase::InProgress;
        if let Some(clock) = self.clock.as_mut() {
            clock.resume(now);
        }
        self.schedule_ai_if_due();
        info!("game resumed");
        Ok(())
    }

    /// Concede the game for the active (human) side.
    ///
    /// Only valid while `InProgress` and only on a human turn; the shell's
    /// confirmation dialog reduces to the `confirmed` flag here. Returns
    /// `Ok(false)` when unconfirmed, `Ok(true)` when the game ended.
    pub fn surrender(&mut self, confirmed: bool, now: Instant) -> Result<bool, GameError> {
        self.ensure_in_progress()?;
        if let Some(computer) = self.config.mode.computer_side() {
            if self.active_side == computer {
                return Err(GameError::NotActiveSide {
                    side: computer.opponent(),
                });
            }
        }
        if !confirmed {
            return Ok(false);
        }
        self.finish(Outcome::Surrender(self.active_side), now);
        Ok(true)
    }

    fn finish(&mut self, outcome: Outcome, now: Instant) {
        self.phase = GamePhase::Finished;
        self.outcome = Some(outcome);
        self.pending_ai = None;
        // Freeze the clock so snapshots keep the final times
        if let Some(clock) = self.clock.as_mut() {
            if !clock.is_paused() {
                clock.pause(now);
            }
        }
        info!(?outcome, "game finished");
    }

    fn schedule_ai_if_due(&mut self) {
        if self.phase == GamePhase::InProgress
            && self.config.mode.computer_side() == Some(self.active_side)
        {
            self.pending_ai = Some(self.config.ai_delay_ticks.max(1));
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::WrongPhase {
                expected: GamePhase::InProgress,
                actual: self.phase,
            });
        }
        Ok(())
    }

    // Read-only accessors

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Whether a computer move is scheduled but not yet applied
    pub fn is_ai_pending(&self) -> bool {
        self.pending_ai.is_some()
    }

    /// Build the read-only view the UI shell renders from.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let cells = (0..TOTAL_CELLS)
            .map(|idx| self.board.get(Pos::from_index(idx)))
            .collect();
        let (remaining_move_secs, elapsed_secs) = match self.clock.as_ref() {
            Some(clock) => (clock.remaining_move(now), clock.elapsed(now).as_secs()),
            None => (self.config.move_limit.as_secs_f64(), 0),
        };
        Snapshot {
            cells,
            active_side: self.active_side,
            phase: self.phase,
            outcome: self.outcome,
            remaining_move_secs,
            elapsed_secs,
            last_move: self.last_move,
            winning_line: self.win_line,
            black_stones: self.board.stones(Side::Black).count(),
            white_stones: self.board.stones(Side::White).count(),
        }
    }
}
