//! Application state for the TUI.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use log::debug;

use crate::core::rounding::ms_to_seconds;
use crate::core::Phase;
use crate::error::BreatheError;
use crate::features::analysis::{save_session_from_latest, SavedSession};
use crate::features::stats::BreathStats;
use crate::features::stopwatch::{
    send_commit, CommitReceipt, IntervalTicks, PendingCommit, Stopwatch, TickSource,
};
use crate::store::{BreathSession, Store, TimingRecord};

/// Work handed to the Store worker.
#[derive(Debug)]
pub enum Job {
    /// Save a stopwatch measurement.
    Commit(PendingCommit),
    /// Reload timings and sessions.
    Refresh,
    /// Merge the latest timings into a session.
    SaveSession,
    /// Delete one timing.
    Delete(String),
}

/// Result of a [`Job`], sent back to the UI thread.
#[derive(Debug)]
pub enum Outcome {
    Committed {
        pending: PendingCommit,
        result: Result<Option<String>, BreatheError>,
    },
    Refreshed(Result<(Vec<TimingRecord>, Vec<BreathSession>), BreatheError>),
    SessionSaved(Result<SavedSession, BreatheError>),
    Deleted {
        id: String,
        result: Result<(), BreatheError>,
    },
}

/// Run jobs against the Store until the sending side goes away.
fn spawn_worker(store: Arc<dyn Store>, jobs: Receiver<Job>, outcomes: Sender<Outcome>) {
    thread::spawn(move || {
        for job in jobs {
            let outcome = match job {
                Job::Commit(pending) => {
                    let result = send_commit(&pending, store.as_ref());
                    Outcome::Committed { pending, result }
                }
                Job::Refresh => Outcome::Refreshed(
                    store
                        .list_timings()
                        .and_then(|timings| Ok((timings, store.list_sessions()?))),
                ),
                Job::SaveSession => Outcome::SessionSaved(save_session_from_latest(store.as_ref())),
                Job::Delete(id) => {
                    let result = store.delete_timing(&id);
                    Outcome::Deleted { id, result }
                }
            };
            if outcomes.send(outcome).is_err() {
                break;
            }
        }
    });
}

/// Application state.
pub struct App<T: TickSource = IntervalTicks> {
    /// The only stopwatch.
    pub stopwatch: Stopwatch<T>,
    /// Saved timings, in Store order.
    pub timings: Vec<TimingRecord>,
    /// Saved sessions, in Store order.
    pub sessions: Vec<BreathSession>,
    /// Per-phase averages over `timings`.
    pub stats: BreathStats,
    /// Selected row in the timings list.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the key help overlay is open.
    pub show_help: bool,
    /// Jobs sent to the worker without an outcome yet.
    pub in_flight: usize,
    jobs: Sender<Job>,
    outcomes: Receiver<Outcome>,
}

impl App<IntervalTicks> {
    /// Create the app with a wall-clock stopwatch and load past data.
    pub fn new(store: Arc<dyn Store>, tick_ms: u64) -> Self {
        Self::with_stopwatch(store, Stopwatch::new(tick_ms))
    }
}

impl<T: TickSource> App<T> {
    /// Create the app around an existing stopwatch and load past data.
    pub fn with_stopwatch(store: Arc<dyn Store>, stopwatch: Stopwatch<T>) -> Self {
        let (job_tx, job_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        spawn_worker(store, job_rx, outcome_tx);

        let mut app = Self {
            stopwatch,
            timings: Vec::new(),
            sessions: Vec::new(),
            stats: BreathStats::default(),
            selected: 0,
            status: Some("Press 1/2/3 to pick a phase, ? for help".to_string()),
            show_help: false,
            in_flight: 0,
            jobs: job_tx,
            outcomes: outcome_rx,
        };
        app.dispatch(Job::Refresh);
        app
    }

    /// Advance the stopwatch and apply any finished jobs.
    pub fn tick(&mut self) {
        self.stopwatch.update();
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply(outcome);
        }
    }

    fn dispatch(&mut self, job: Job) {
        if self.jobs.send(job).is_ok() {
            self.in_flight += 1;
        } else {
            self.status = Some("Store worker stopped".to_string());
        }
    }

    /// Select the phase being measured.
    pub fn select_phase(&mut self, phase: Phase) {
        self.stopwatch.select_phase(phase);
        self.status = Some(format!("Phase: {phase}"));
    }

    /// Start or pause the stopwatch.
    pub fn toggle(&mut self) {
        self.stopwatch.toggle();
    }

    /// Stop and zero the stopwatch.
    pub fn reset(&mut self) {
        self.stopwatch.reset();
        self.status = None;
    }

    /// Send the current measurement to the Store.
    ///
    /// The clock keeps its value (and keeps running) until the save
    /// succeeds.
    pub fn save_timing(&mut self) {
        match self.stopwatch.begin_commit() {
            Ok(pending) => {
                self.status = Some(format!("Saving {} = {}s...", pending.phase(), pending.duration()));
                self.dispatch(Job::Commit(pending));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Merge the latest timings into a session.
    pub fn save_session(&mut self) {
        self.status = Some("Saving session...".to_string());
        self.dispatch(Job::SaveSession);
    }

    /// Reload past data.
    pub fn refresh(&mut self) {
        self.dispatch(Job::Refresh);
    }

    /// Delete the selected timing.
    pub fn delete_selected(&mut self) {
        if let Some(record) = self.timings.get(self.selected) {
            let id = record.id.clone();
            self.status = Some(format!("Deleting {id}..."));
            self.dispatch(Job::Delete(id));
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.timings.len() {
            self.selected += 1;
        }
    }

    /// Apply a finished job to the views.
    pub fn apply(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Outcome::Committed { pending, result } => match result {
                Ok(id) => {
                    let cleared = self.stopwatch.finish_commit(&pending);
                    let receipt = CommitReceipt {
                        phase: pending.phase(),
                        seconds: ms_to_seconds(pending.elapsed_ms()),
                        id,
                        cleared,
                    };
                    self.status = Some(receipt.message());
                    self.dispatch(Job::Refresh);
                }
                Err(e) => self.fail("save timing", &e),
            },
            Outcome::Refreshed(result) => match result {
                Ok((timings, sessions)) => {
                    self.stats = BreathStats::calculate(&timings);
                    self.timings = timings;
                    self.sessions = sessions;
                    if self.selected >= self.timings.len() {
                        self.selected = self.timings.len().saturating_sub(1);
                    }
                }
                Err(e) => self.fail("refresh", &e),
            },
            Outcome::SessionSaved(result) => match result {
                Ok(saved) => {
                    self.status = Some(format!(
                        "Breath session saved: {} / {} / {}",
                        saved.session.inhale, saved.session.hold, saved.session.exhale
                    ));
                    self.dispatch(Job::Refresh);
                }
                Err(e) => self.fail("save session", &e),
            },
            Outcome::Deleted { id, result } => match result {
                Ok(()) => {
                    self.status = Some(format!("Deleted timing: {id}"));
                    self.dispatch(Job::Refresh);
                }
                Err(e) => self.fail("delete timing", &e),
            },
        }
    }

    fn fail(&mut self, action: &str, error: &BreatheError) {
        debug!("{action} failed: {error}");
        self.status = Some(format!("Error: {error}"));
    }

    /// Block until the next outcome arrives and apply it.
    #[cfg(test)]
    fn wait_for_outcome(&mut self) -> bool {
        match self.outcomes.recv_timeout(std::time::Duration::from_secs(5)) {
            Ok(outcome) => {
                self.apply(outcome);
                true
            }
            Err(_) => false,
        }
    }
}
