//! Breath session command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, SessionCommands};
use crate::error::BreatheError;
use crate::features::analysis::{classify_sessions, save_session_from_latest};
use crate::output::{format_sessions, to_json};
use crate::store::Store;

/// Execute session subcommands.
///
/// # Errors
///
/// Returns `NoData`/`IncompleteData` when timings are missing, or the
/// Store's error.
pub fn session(
    store: &dyn Store,
    cmd: SessionCommands,
    format: OutputFormat,
) -> Result<String, BreatheError> {
    match cmd {
        SessionCommands::Save => save(store, format),
        SessionCommands::List => list(store, format),
    }
}

fn save(store: &dyn Store, format: OutputFormat) -> Result<String, BreatheError> {
    let saved = save_session_from_latest(store)?;

    match format {
        OutputFormat::Json => to_json(&saved),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push("Breath session saved.".green().to_string());
            output.push(format!(
                "   Inhale: {}s  Hold: {}s  Exhale: {}s",
                saved.session.inhale, saved.session.hold, saved.session.exhale
            ));
            output.push(String::new());
            output.push(
                "   Use 'breathe session list' to see how it scores"
                    .dimmed()
                    .to_string(),
            );
            Ok(output.join("\n"))
        }
    }
}

fn list(store: &dyn Store, format: OutputFormat) -> Result<String, BreatheError> {
    let sessions = store.list_sessions()?;
    format_sessions(classify_sessions(&sessions), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BreathSession, MockStore};

    fn session_at(inhale: f64, hold: f64, exhale: f64) -> BreathSession {
        BreathSession {
            id: None,
            inhale,
            hold,
            exhale,
            date: "2024-03-01".to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn test_list_classifies_in_store_order() {
        colored::control::set_override(false);
        let mut store = MockStore::new();
        store.expect_list_sessions().returning(|| {
            Ok(vec![session_at(5.0, 10.0, 5.0), session_at(4.0, 16.0, 8.0)])
        });

        let output = session(&store, SessionCommands::List, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["items"][0]["index"], "#1");
        assert_eq!(parsed["items"][0]["category"], "Needs Attention");
        assert_eq!(parsed["items"][1]["category"], "Healthy");
        assert_eq!(parsed["items"][1]["style"], "good");
    }

    #[test]
    fn test_list_empty() {
        let mut store = MockStore::new();
        store.expect_list_sessions().returning(|| Ok(Vec::new()));

        let output = session(&store, SessionCommands::List, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No complete sessions saved yet."));
    }

    #[test]
    fn test_save_without_timings() {
        let mut store = MockStore::new();
        store.expect_list_timings().returning(|| Ok(Vec::new()));
        store.expect_create_session().times(0);

        let err = session(&store, SessionCommands::Save, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, BreatheError::NoData));
    }
}
