//! Phase stopwatch.
//!
//! Provides the breathing-phase stopwatch:
//! - Start/pause/reset with tick-based advancement
//! - Injectable tick sources for deterministic tests
//! - Saving a measurement to the Store without losing a concurrent reset

pub mod commit;
pub mod ticks;
pub mod timer;

pub use commit::{commit_timing, send_commit, CommitReceipt, PendingCommit};
pub use ticks::{IntervalTicks, ManualTicks, TickSource};
pub use timer::{format_elapsed, Stopwatch, StopwatchState};
