//! Statistics command implementation.

use crate::cli::args::OutputFormat;
use crate::error::BreatheError;
use crate::features::stats::BreathStats;
use crate::output::format_stats;
use crate::store::Store;

/// Show per-phase averages over all saved timings.
///
/// # Errors
///
/// Returns an error if the Store call fails.
pub fn stats(store: &dyn Store, format: OutputFormat) -> Result<String, BreatheError> {
    let records = store.list_timings()?;
    let stats = BreathStats::calculate(&records);
    format_stats(&stats, format)
}
