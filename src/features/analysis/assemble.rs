//! Building a breath session from saved timings.

use log::debug;

use crate::core::rounding::format_ms_as_seconds;
use crate::core::rounding::seconds_to_ms;
use crate::core::{sort_newest_first, Phase};
use crate::error::BreatheError;
use crate::store::{CreateResponse, NewSession, Store, TimingRecord};

/// Pick the first record of each phase, in slice order.
///
/// The slice order decides what "latest" means; see
/// [`save_session_from_latest`] for the recency ordering applied before
/// this is called against the Store.
///
/// # Errors
///
/// Returns `BreatheError::NoData` for an empty slice and
/// `BreatheError::IncompleteData` if any phase has no record.
pub fn build_session_from_latest(records: &[TimingRecord]) -> Result<NewSession, BreatheError> {
    if records.is_empty() {
        return Err(BreatheError::NoData);
    }

    let first = |phase: Phase| records.iter().find(|r| r.phase == phase);

    match (
        first(Phase::Inhalation),
        first(Phase::BreathHold),
        first(Phase::Exhalation),
    ) {
        (Some(inhale), Some(hold), Some(exhale)) => Ok(NewSession {
            inhale: format_duration(inhale.duration),
            hold: format_duration(hold.duration),
            exhale: format_duration(exhale.duration),
        }),
        _ => Err(BreatheError::IncompleteData {
            missing: Phase::ALL
                .into_iter()
                .filter(|phase| first(*phase).is_none())
                .collect(),
        }),
    }
}

/// Result of saving a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SavedSession {
    pub session: NewSession,
    pub id: Option<String>,
}

/// Merge the most recent timing of each phase into a new session and
/// persist it.
///
/// Timings are ordered newest first by their Store timestamps before the
/// first-match selection, so the result does not depend on the Store's
/// listing order when timestamps are present.
///
/// # Errors
///
/// Returns `NoData`/`IncompleteData` when timings are missing, or the
/// Store's error.
pub fn save_session_from_latest(store: &dyn Store) -> Result<SavedSession, BreatheError> {
    let mut records = store.list_timings()?;
    sort_newest_first(&mut records);

    let session = build_session_from_latest(&records)?;
    debug!(
        "saving session {} / {} / {}",
        session.inhale, session.hold, session.exhale
    );
    let CreateResponse { id, .. } = store.create_session(&session)?;

    Ok(SavedSession { session, id })
}

fn format_duration(seconds: f64) -> String {
    format_ms_as_seconds(seconds_to_ms(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockStore, PhaseLabel};

    fn record(id: &str, phase: Phase, duration: f64, timestamp: Option<&str>) -> TimingRecord {
        TimingRecord {
            id: id.to_string(),
            phase: phase.into(),
            duration,
            date: String::new(),
            timestamp: timestamp.map(ToString::to_string),
        }
    }

    #[test]
    fn test_empty_is_no_data() {
        assert!(matches!(
            build_session_from_latest(&[]),
            Err(BreatheError::NoData)
        ));
    }

    #[test]
    fn test_single_phase_is_incomplete() {
        let records = vec![record("0", Phase::Inhalation, 4.0, None)];
        match build_session_from_latest(&records) {
            Err(BreatheError::IncompleteData { missing }) => {
                assert_eq!(missing, vec![Phase::BreathHold, Phase::Exhalation]);
            }
            other => panic!("expected IncompleteData, got {other:?}"),
        }
    }

    #[test]
    fn test_first_match_per_phase() {
        let records = vec![
            record("5", Phase::Exhalation, 8.0, None),
            record("4", Phase::Inhalation, 4.0, None),
            record("3", Phase::Inhalation, 3.0, None),
            record("2", Phase::BreathHold, 16.0, None),
            record("1", Phase::BreathHold, 12.5, None),
        ];
        let session = build_session_from_latest(&records).unwrap();
        assert_eq!(
            session,
            NewSession {
                inhale: "4.00".to_string(),
                hold: "16.00".to_string(),
                exhale: "8.00".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_labels_are_skipped() {
        let mut records = vec![
            record("9", Phase::Inhalation, 1.0, None),
            record("3", Phase::Inhalation, 4.0, None),
            record("2", Phase::BreathHold, 16.0, None),
            record("1", Phase::Exhalation, 8.0, None),
        ];
        records[0].phase = PhaseLabel::Other("inhalation".to_string());

        let session = build_session_from_latest(&records).unwrap();
        assert_eq!(session.inhale, "4.00");
    }

    #[test]
    fn test_save_uses_newest_records() {
        let mut store = MockStore::new();
        store.expect_list_timings().returning(|| {
            // Store lists oldest first here.
            Ok(vec![
                record("0", Phase::Inhalation, 3.0, Some("2024-03-01T08:00:00")),
                record("1", Phase::BreathHold, 12.0, Some("2024-03-01T08:00:10")),
                record("2", Phase::Exhalation, 6.0, Some("2024-03-01T08:00:20")),
                record("3", Phase::Inhalation, 4.5, Some("2024-03-01T09:00:00")),
            ])
        });
        store
            .expect_create_session()
            .withf(|s| s.inhale == "4.50" && s.hold == "12.00" && s.exhale == "6.00")
            .times(1)
            .returning(|_| {
                Ok(CreateResponse {
                    success: true,
                    id: Some("9".to_string()),
                })
            });

        let saved = save_session_from_latest(&store).unwrap();
        assert_eq!(saved.id.as_deref(), Some("9"));
    }

    #[test]
    fn test_save_incomplete_makes_no_session() {
        let mut store = MockStore::new();
        store
            .expect_list_timings()
            .returning(|| Ok(vec![record("0", Phase::BreathHold, 10.0, None)]));
        store.expect_create_session().times(0);

        let err = save_session_from_latest(&store).unwrap_err();
        assert!(matches!(err, BreatheError::IncompleteData { .. }));
    }
}
