//! Session analysis.
//!
//! Assembles breath sessions from saved timings and classifies them
//! against the ideal 1:4:2 breathing ratio.

pub mod assemble;
pub mod classify;

pub use assemble::{build_session_from_latest, save_session_from_latest, SavedSession};
pub use classify::{
    classify_sessions, Category, ClassifiedSession, ClassifiedSessions, RatioScore,
    IDEAL_EXHALE_RATIO, IDEAL_HOLD_RATIO,
};
