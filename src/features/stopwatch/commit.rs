//! Saving the stopwatch's measurement to the Store.

use log::debug;
use serde::Serialize;

use super::ticks::TickSource;
use super::timer::Stopwatch;
use crate::core::rounding::{format_ms_as_seconds, ms_to_seconds};
use crate::core::Phase;
use crate::error::BreatheError;
use crate::store::{NewTiming, Store};

/// A measurement captured before it is sent to the Store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    phase: Phase,
    elapsed_ms: u64,
    epoch: u64,
}

impl PendingCommit {
    pub(super) const fn new(phase: Phase, elapsed_ms: u64, epoch: u64) -> Self {
        Self {
            phase,
            elapsed_ms,
            epoch,
        }
    }

    /// The measured phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The measured time.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub(super) const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Duration as the 2-decimal seconds string sent to the Store.
    #[must_use]
    pub fn duration(&self) -> String {
        format_ms_as_seconds(self.elapsed_ms)
    }

    /// The create-timing request body.
    #[must_use]
    pub fn request(&self) -> NewTiming {
        NewTiming {
            phase: self.phase,
            duration: self.duration(),
        }
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitReceipt {
    /// Saved phase.
    pub phase: Phase,
    /// Saved duration in seconds.
    pub seconds: f64,
    /// Id assigned by the Store, if it reported one.
    pub id: Option<String>,
    /// Whether the stopwatch was cleared. False when it was reset while
    /// the save was in flight.
    pub cleared: bool,
}

impl CommitReceipt {
    /// One-line confirmation, e.g. `Saved: Inhalation = 4.25s`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Saved: {} = {:.2}s", self.phase, self.seconds)
    }
}

/// Send a pending measurement to the Store.
///
/// This half runs without the stopwatch, so it can happen on a worker
/// thread while the clock keeps going.
///
/// # Errors
///
/// Returns the Store's error unchanged; nothing is retried.
pub fn send_commit(pending: &PendingCommit, store: &dyn Store) -> Result<Option<String>, BreatheError> {
    debug!("saving {} = {}s", pending.phase, pending.duration());
    let response = store.create_timing(&pending.request())?;
    Ok(response.id)
}

/// Save the current measurement and clear the clock on success.
///
/// # Errors
///
/// Returns `BreatheError::Validation` if no phase is selected (no Store call
/// is made), or the Store's error, in which case elapsed time is kept.
pub fn commit_timing<T: TickSource>(
    stopwatch: &mut Stopwatch<T>,
    store: &dyn Store,
) -> Result<CommitReceipt, BreatheError> {
    let pending = stopwatch.begin_commit()?;
    let id = send_commit(&pending, store)?;
    let cleared = stopwatch.finish_commit(&pending);

    Ok(CommitReceipt {
        phase: pending.phase,
        seconds: ms_to_seconds(pending.elapsed_ms),
        id,
        cleared,
    })
}
