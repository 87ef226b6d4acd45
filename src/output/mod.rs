//! Output formatting for breathe.
//!
//! This module turns Store data into render-ready rows and prints them as
//! colored tables or JSON.

mod json;
mod pretty;
pub mod rows;

use crate::cli::args::OutputFormat;
use crate::error::BreatheError;
use crate::features::analysis::ClassifiedSession;
use crate::features::stats::BreathStats;
use crate::store::{Health, Profile, TimingRecord};

pub use json::*;
pub use pretty::*;
pub use rows::{session_rows, stat_strings, timing_rows, SessionRow, StatStrings, StyleHint, TimingRow};

/// Format timings based on output format
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_timings(records: &[TimingRecord], format: OutputFormat) -> Result<String, BreatheError> {
    let rows = timing_rows(records);
    match format {
        OutputFormat::Pretty => Ok(format_timings_pretty(&rows)),
        OutputFormat::Json => format_timings_json(&rows),
    }
}

/// Format classified sessions based on output format
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_sessions<I>(classified: I, format: OutputFormat) -> Result<String, BreatheError>
where
    I: IntoIterator<Item = ClassifiedSession>,
{
    let rows = session_rows(classified);
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(&rows)),
        OutputFormat::Json => format_sessions_json(&rows),
    }
}

/// Format stats based on output format
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_stats(stats: &BreathStats, format: OutputFormat) -> Result<String, BreatheError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats)),
        OutputFormat::Json => format_stats_json(stats),
    }
}

/// Format the profile based on output format
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String, BreatheError> {
    match format {
        OutputFormat::Pretty => Ok(format_profile_pretty(profile)),
        OutputFormat::Json => to_json(profile),
    }
}

/// Format a health report based on output format
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_health(health: &Health, format: OutputFormat) -> Result<String, BreatheError> {
    match format {
        OutputFormat::Pretty => Ok(format_health_pretty(health)),
        OutputFormat::Json => to_json(health),
    }
}
