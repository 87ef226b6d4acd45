//! Error types for breathe.

use thiserror::Error;

use crate::core::Phase;

/// Every failure a command or the TUI can surface to the user.
///
/// None of these are fatal: the CLI prints them and exits non-zero, the TUI
/// shows them in the status bar and keeps running.
#[derive(Debug, Error)]
pub enum BreatheError {
    /// Invalid user input, e.g. saving without a selected phase.
    #[error("{0}")]
    Validation(String),

    /// Session assembly found no timings at all.
    #[error("No timings saved yet. Save inhale, hold, and exhale first.")]
    NoData,

    /// Session assembly is missing at least one phase.
    #[error(
        "Need at least one Inhalation, Breath-Hold, and Exhalation timing to save a session (missing: {})",
        format_phases(missing)
    )]
    IncompleteData {
        /// Phases with no recorded timing.
        missing: Vec<Phase>,
    },

    /// The Store could not be reached.
    #[error("store unavailable: {0}. Check that the backend is running.")]
    StoreUnavailable(String),

    /// The Store answered with a non-success status.
    #[error("store rejected the request ({status}): {message}")]
    StoreRejected {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the Store.
        message: String,
    },

    /// JSON (de)serialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Local I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or terminal setup problem.
    #[error("{0}")]
    Config(String),
}

impl BreatheError {
    /// Shorthand for the "no phase selected" validation failure.
    #[must_use]
    pub fn no_phase_selected() -> Self {
        Self::Validation("no phase selected: please select a timing type first".to_string())
    }}

fn format_phases(phases: &[Phase]) -> String {
    phases
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_data_lists_missing_phases() {
        let err = BreatheError::IncompleteData {
            missing: vec![Phase::BreathHold, Phase::Exhalation],
        };
        assert!(err.to_string().contains("Breath-Hold, Exhalation"));
    }
}
