//! Game clock: total elapsed time plus a per-move countdown
//!
//! The clock is passive: it pushes no notifications. The engine polls
//! [`GameClock::remaining_move`] on every tick and acts when the value
//! crosses zero. Every method takes `now` explicitly so callers (and tests)
//! control the timeline; the engine's public wrappers pass `Instant::now()`.

use std::time::{Duration, Instant};

/// Per-move time limit in seconds
pub const DEFAULT_MOVE_LIMIT: Duration = Duration::from_secs(60);

/// Clock state for one game
#[derive(Debug, Clone)]
pub struct GameClock {
    started_at: Instant,
    /// Start of the current per-move countdown. Shifted forward on resume so
    /// pausing never consumes move time.
    last_move_at: Instant,
    paused_at: Option<Instant>,
    total_paused: Duration,
    move_limit: Duration,
}

impl GameClock {
    /// Start a fresh clock: both the game timer and the first move's
    /// countdown begin at `now`.
    pub fn start(move_limit: Duration, now: Instant) -> Self {
        Self {
            started_at: now,
            last_move_at: now,
            paused_at: None,
            total_paused: Duration::ZERO,
            move_limit,
        }
    }

    /// Freeze both the elapsed timer and the per-move countdown.
    pub fn pause(&mut self, now: Instant) {
        debug_assert!(self.paused_at.is_none());
        self.paused_at = Some(now);
    }

    /// Unfreeze. The remaining move time is exactly what it was at the
    /// moment of pausing.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            let paused_for = now.saturating_duration_since(paused_at);
            self.total_paused += paused_for;
            self.last_move_at += paused_for;
        }
    }

    /// Restart the per-move countdown for the next side.
    pub fn on_move_applied(&mut self, now: Instant) {
        self.last_move_at = now;
    }

    /// Seconds left on the current move. Negative values signal a timeout.
    /// Frozen while paused.
    pub fn remaining_move(&self, now: Instant) -> f64 {
        let spent = self
            .effective_now(now)
            .saturating_duration_since(self.last_move_at);
        self.move_limit.as_secs_f64() - spent.as_secs_f64()
    }

    /// Total game time excluding paused intervals. Frozen while paused.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.effective_now(now)
            .saturating_duration_since(self.started_at)
            .saturating_sub(self.total_paused)
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn move_limit(&self) -> Duration {
        self.move_limit
    }

    /// While paused, time stands still at the pause instant.
    #[inline]
    fn effective_now(&self, now: Instant) -> Instant {
        self.paused_at.unwrap_or(now)
    }
}
