//! Aggregate timing statistics.
//!
//! Computes per-phase averages from saved timings.

use serde::{Deserialize, Serialize};

use crate::core::rounding::round2;
use crate::core::Phase;
use crate::store::TimingRecord;

/// Per-phase averages and the record count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreathStats {
    /// Mean inhalation in seconds, 2 decimals
    pub avg_inhale: f64,
    /// Mean breath-hold in seconds, 2 decimals
    pub avg_hold: f64,
    /// Mean exhalation in seconds, 2 decimals
    pub avg_exhale: f64,
    /// Number of timings
    pub total: usize,
}

impl BreathStats {
    /// Calculate stats from timings.
    ///
    /// A phase without timings averages to 0.00.
    #[must_use]
    pub fn calculate(records: &[TimingRecord]) -> Self {
        Self {
            avg_inhale: phase_mean(records, Phase::Inhalation),
            avg_hold: phase_mean(records, Phase::BreathHold),
            avg_exhale: phase_mean(records, Phase::Exhalation),
            total: records.len(),
        }
    }

    /// Mean for one phase.
    #[must_use]
    pub const fn average(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Inhalation => self.avg_inhale,
            Phase::BreathHold => self.avg_hold,
            Phase::Exhalation => self.avg_exhale,
        }
    }
}

impl Default for BreathStats {
    fn default() -> Self {
        Self::calculate(&[])
    }
}

#[allow(clippy::cast_precision_loss)]
fn phase_mean(records: &[TimingRecord], phase: Phase) -> f64 {
    let (sum, count) = records
        .iter()
        .filter(|r| r.phase == phase)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.duration, count + 1));

    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phase: Phase, duration: f64) -> TimingRecord {
        TimingRecord {
            id: "x".to_string(),
            phase: phase.into(),
            duration,
            date: String::new(),
            timestamp: None,
        }
    }

    #[test]
    fn test_empty_stats_default_to_zero() {
        let stats = BreathStats::calculate(&[]);
        assert_eq!(stats.total, 0);
        for phase in Phase::ALL {
            assert!(stats.average(phase).abs() < f64::EPSILON);
            assert!(!stats.average(phase).is_nan());
        }
    }

    #[test]
    fn test_per_phase_means() {
        let records = vec![
            record(Phase::Inhalation, 4.0),
            record(Phase::Inhalation, 5.0),
            record(Phase::BreathHold, 16.0),
            record(Phase::Inhalation, 4.5),
        ];
        let stats = BreathStats::calculate(&records);

        assert_eq!(stats.total, 4);
        assert!((stats.avg_inhale - 4.5).abs() < f64::EPSILON);
        assert!((stats.avg_hold - 16.0).abs() < f64::EPSILON);
        assert!(stats.avg_exhale.abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_labels_count_but_do_not_average() {
        let mut odd = record(Phase::Inhalation, 100.0);
        odd.phase = crate::store::PhaseLabel::Other("Sigh".to_string());
        let records = vec![record(Phase::Inhalation, 4.0), odd];
        let stats = BreathStats::calculate(&records);

        assert_eq!(stats.total, 2);
        assert!((stats.avg_inhale - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_means_are_rounded() {
        let records = vec![
            record(Phase::Exhalation, 1.0),
            record(Phase::Exhalation, 1.0),
            record(Phase::Exhalation, 2.0),
        ];
        let stats = BreathStats::calculate(&records);
        assert!((stats.avg_exhale - 1.33).abs() < f64::EPSILON);
    }
}
