//! The phase stopwatch.

use serde::{Deserialize, Serialize};

use super::commit::PendingCommit;
use super::ticks::{IntervalTicks, TickSource};
use crate::core::Phase;
use crate::error::BreatheError;

/// Coarse stopwatch state for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwatchState {
    /// Not running and nothing measured.
    Idle,
    /// Advancing.
    Running,
    /// Stopped with time on the clock.
    Paused,
}

impl std::fmt::Display for StopwatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// Measures one breathing phase at a time.
///
/// Elapsed time only moves in whole ticks of `tick_ms`, and only when
/// [`Stopwatch::update`] folds in the ticks its source reports as due.
#[derive(Debug, Clone)]
pub struct Stopwatch<T = IntervalTicks> {
    elapsed_ms: u64,
    running: bool,
    phase: Option<Phase>,
    tick_ms: u64,
    ticks: T,
    /// Bumped whenever elapsed is cleared, so late commit results can tell
    /// whether the value they measured is still on the clock.
    epoch: u64,
}

impl Stopwatch<IntervalTicks> {
    /// A wall-clock stopwatch ticking every `tick_ms` milliseconds.
    #[must_use]
    pub fn new(tick_ms: u64) -> Self {
        let tick_ms = tick_ms.max(1);
        Self::with_ticks(tick_ms, IntervalTicks::from_millis(tick_ms))
    }
}

impl Default for Stopwatch<IntervalTicks> {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<T: TickSource> Stopwatch<T> {
    /// A stopwatch driven by an arbitrary tick source.
    #[must_use]
    pub fn with_ticks(tick_ms: u64, ticks: T) -> Self {
        Self {
            elapsed_ms: 0,
            running: false,
            phase: None,
            tick_ms: tick_ms.max(1),
            ticks,
            epoch: 0,
        }
    }

    /// Choose which phase is being measured. Does not touch the clock.
    pub fn select_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
    }

    /// The selected phase, if any.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Start advancing. No-op while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.ticks.restart();
        self.running = true;
    }

    /// Stop advancing, keeping the time measured so far.
    pub fn pause(&mut self) {
        self.update();
        self.running = false;
    }

    /// Start if stopped, pause if running.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and clear the clock.
    pub fn reset(&mut self) {
        self.running = false;
        self.clear();
    }

    /// Fold due ticks into elapsed time.
    ///
    /// Returns true if the elapsed time changed.
    pub fn update(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let due = self.ticks.due_ticks();
        if due == 0 {
            return false;
        }
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(due.saturating_mul(self.tick_ms));
        true
    }

    /// Measured time in milliseconds.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Check if the stopwatch is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current display state.
    #[must_use]
    pub const fn state(&self) -> StopwatchState {
        if self.running {
            StopwatchState::Running
        } else if self.elapsed_ms == 0 {
            StopwatchState::Idle
        } else {
            StopwatchState::Paused
        }
    }

    /// Increment per tick in milliseconds.
    #[must_use]
    pub const fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Elapsed time as `MM:SS.CC`.
    #[must_use]
    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }

    /// The tick source, e.g. to push ticks into a [`super::ManualTicks`].
    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    /// Snapshot the selected phase and elapsed time for saving.
    ///
    /// # Errors
    ///
    /// Returns `BreatheError::Validation` if no phase is selected.
    pub fn begin_commit(&mut self) -> Result<PendingCommit, BreatheError> {
        let phase = self.phase.ok_or_else(BreatheError::no_phase_selected)?;
        self.update();
        Ok(PendingCommit::new(phase, self.elapsed_ms, self.epoch))
    }

    /// Apply a successful save.
    ///
    /// Clears the clock only if nothing cleared it since the snapshot was
    /// taken; the running flag is left alone either way. Returns true if the
    /// clock was cleared.
    pub fn finish_commit(&mut self, pending: &PendingCommit) -> bool {
        if pending.epoch() != self.epoch {
            return false;
        }
        self.update();
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.elapsed_ms = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

/// Format milliseconds as `MM:SS.CC`.
///
/// Minutes are zero-padded to two digits and keep growing past 99.
#[must_use]
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let centis = (ms % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
