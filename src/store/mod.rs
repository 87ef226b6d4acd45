//! Access to the backend Store that owns timings, sessions, and the profile.

pub mod client;
pub mod types;

pub use client::HttpStore;
pub use types::*;

use crate::error::BreatheError;

/// Record-oriented interface to the Store.
///
/// Every method is a single round trip. Failures are never retried here;
/// callers surface them to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Store: Send + Sync {
    /// Persist one timing.
    fn create_timing(&self, timing: &NewTiming) -> Result<CreateResponse, BreatheError>;

    /// All timings in Store order.
    fn list_timings(&self) -> Result<Vec<TimingRecord>, BreatheError>;

    /// Delete a timing by id. Deleting a missing id is not an error.
    fn delete_timing(&self, id: &str) -> Result<(), BreatheError>;

    /// Persist one breath session.
    fn create_session(&self, session: &NewSession) -> Result<CreateResponse, BreatheError>;

    /// All sessions in Store order.
    fn list_sessions(&self) -> Result<Vec<BreathSession>, BreatheError>;

    /// The profile, or an all-blank one if none was saved.
    fn get_profile(&self) -> Result<Profile, BreatheError>;

    /// Overwrite the whole profile.
    fn save_profile(&self, profile: &Profile) -> Result<(), BreatheError>;

    /// Irreversibly delete all timings, sessions, and the profile.
    fn clear_all(&self) -> Result<(), BreatheError>;

    /// Liveness and record counts.
    fn health(&self) -> Result<Health, BreatheError>;
}
