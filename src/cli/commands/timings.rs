//! Timing command implementation.
//!
//! Lists, adds, and deletes saved phase timings.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, TimingsCommands};
use crate::core::rounding::{format_ms_as_seconds, seconds_to_ms};
use crate::core::Phase;
use crate::error::BreatheError;
use crate::output::{format_timings, to_json};
use crate::store::{NewTiming, Store};

/// Execute timings subcommands.
///
/// # Errors
///
/// Returns an error if the input is invalid or the Store call fails.
pub fn timings(
    store: &dyn Store,
    cmd: TimingsCommands,
    format: OutputFormat,
) -> Result<String, BreatheError> {
    match cmd {
        TimingsCommands::List => {
            let records = store.list_timings()?;
            format_timings(&records, format)
        }
        TimingsCommands::Add { phase, seconds } => add_timing(store, &phase, seconds, format),
        TimingsCommands::Delete { id } => delete_timing(store, &id, format),
    }
}

/// Save a timing measured outside the stopwatch.
fn add_timing(
    store: &dyn Store,
    phase: &str,
    seconds: f64,
    format: OutputFormat,
) -> Result<String, BreatheError> {
    let phase: Phase = phase.parse()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(BreatheError::Validation(format!(
            "duration must be a non-negative number of seconds, got {seconds}"
        )));
    }

    let timing = NewTiming {
        phase,
        duration: format_ms_as_seconds(seconds_to_ms(seconds)),
    };
    let response = store.create_timing(&timing)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "type": timing.phase,
            "duration": timing.duration,
            "id": response.id,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} = {}s",
            "Saved:".green(),
            timing.phase,
            timing.duration
        )),
    }
}

fn delete_timing(store: &dyn Store, id: &str, format: OutputFormat) -> Result<String, BreatheError> {
    store.delete_timing(id)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": id })),
        OutputFormat::Pretty => Ok(format!("Deleted timing: {id}")),
    }
}
