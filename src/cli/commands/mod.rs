//! Command implementations for breathe.
//!
//! Every command takes the Store it talks to and returns the text to print.

mod profile;
mod session;
mod shell;
mod stats;
mod timings;

pub use profile::profile;
pub use session::session;
pub use shell::completions;
pub use stats::stats;
pub use timings::timings;

use colored::Colorize;
use log::info;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::BreatheError;
use crate::output::{format_health, to_json};
use crate::store::Store;

/// Execute clear command
///
/// # Errors
///
/// Returns `BreatheError::Validation` without `--force`, or the Store's error.
pub fn clear(store: &dyn Store, force: bool, format: OutputFormat) -> Result<String, BreatheError> {
    if !force {
        return Err(BreatheError::Validation(
            "clear deletes all timings, sessions, and the profile; rerun with --force".to_string(),
        ));
    }

    store.clear_all()?;
    info!("cleared all data");

    match format {
        OutputFormat::Json => to_json(&json!({ "cleared": true })),
        OutputFormat::Pretty => Ok("All data cleared.".yellow().to_string()),
    }
}

/// Execute health command
///
/// # Errors
///
/// Returns an error if the Store is unreachable or output formatting fails.
pub fn health(store: &dyn Store, format: OutputFormat) -> Result<String, BreatheError> {
    let health = store.health()?;
    format_health(&health, format)
}
