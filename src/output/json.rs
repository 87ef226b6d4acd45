//! JSON output formatting for breathe.
//!
//! This module provides functions for formatting Store data as JSON.

use serde::Serialize;
use serde_json::json;

use super::rows::{stat_strings, SessionRow, TimingRow};
use crate::error::BreatheError;
use crate::features::stats::BreathStats;

/// Format past-data rows as JSON
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_timings_json(rows: &[TimingRow]) -> Result<String, BreatheError> {
    let output = json!({
        "count": rows.len(),
        "isEmpty": rows.is_empty(),
        "items": rows
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format classified session rows as JSON
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_sessions_json(rows: &[SessionRow]) -> Result<String, BreatheError> {
    let output = json!({
        "count": rows.len(),
        "isEmpty": rows.is_empty(),
        "items": rows
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format stats as JSON, numbers and display strings side by side
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn format_stats_json(stats: &BreathStats) -> Result<String, BreatheError> {
    let output = json!({
        "stats": stats,
        "display": stat_strings(stats)
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `BreatheError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, BreatheError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn test_format_timings_json() {
        let rows = vec![TimingRow {
            id: "1".to_string(),
            date: "2024-03-01 08:00:00".to_string(),
            phase: Phase::Inhalation.into(),
            duration: "4.25".to_string(),
        }];
        let json = format_timings_json(&rows).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["isEmpty"], false);
        assert_eq!(parsed["items"][0]["phase"], "Inhalation");
        assert_eq!(parsed["items"][0]["duration"], "4.25");
    }

    #[test]
    fn test_format_sessions_json_empty() {
        let json = format_sessions_json(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 0);
        assert_eq!(parsed["isEmpty"], true);
    }

    #[test]
    fn test_format_stats_json() {
        let json = format_stats_json(&BreathStats::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["stats"]["total"], 0);
        assert_eq!(parsed["display"]["avg_hold"], "0.00s");
    }
}
