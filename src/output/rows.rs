//! Render-ready rows for the tables every front end shows.
//!
//! These carry display strings only; colors are picked by the pretty
//! printer and the TUI from the [`StyleHint`].

use serde::Serialize;

use crate::features::analysis::{Category, ClassifiedSession};
use crate::features::stats::BreathStats;
use crate::store::{PhaseLabel, TimingRecord};

/// Visual treatment of a classified row, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    Good,
    Borderline,
    Bad,
}

impl StyleHint {
    /// Style for a category.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Healthy => Self::Good,
            Category::Borderline => Self::Borderline,
            Category::NeedsAttention => Self::Bad,
        }
    }

    /// Class name of the category chip.
    #[must_use]
    pub const fn chip_class(&self) -> &'static str {
        match self {
            Self::Good => "chip-good",
            Self::Borderline => "chip-borderline",
            Self::Bad => "chip-bad",
        }
    }

    /// Class name of the whole row.
    #[must_use]
    pub const fn row_class(&self) -> &'static str {
        match self {
            Self::Good => "highlight-good",
            Self::Borderline => "highlight-borderline",
            Self::Bad => "highlight-bad",
        }
    }
}

/// One line of the past-data table. `id` is the delete key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingRow {
    pub id: String,
    pub date: String,
    pub phase: PhaseLabel,
    pub duration: String,
}

/// One line of the classified sessions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub index: String,
    pub inhale: String,
    pub hold: String,
    pub exhale: String,
    pub ratio: String,
    pub distance: String,
    pub category: Category,
    pub style: StyleHint,
    pub date: String,
}

/// The four aggregate figures as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatStrings {
    pub avg_inhale: String,
    pub avg_hold: String,
    pub avg_exhale: String,
    pub total: String,
}

/// Rows for the past-data table, in Store order.
#[must_use]
pub fn timing_rows(records: &[TimingRecord]) -> Vec<TimingRow> {
    records
        .iter()
        .map(|r| TimingRow {
            id: r.id.clone(),
            date: r.date.clone(),
            phase: r.phase.clone(),
            duration: format!("{:.2}", r.duration),
        })
        .collect()
}

/// Rows for the sessions table, in the order given.
pub fn session_rows<I>(classified: I) -> Vec<SessionRow>
where
    I: IntoIterator<Item = ClassifiedSession>,
{
    classified
        .into_iter()
        .map(|c| SessionRow {
            index: format!("#{}", c.index),
            inhale: format!("{:.2}", c.session.inhale),
            hold: format!("{:.2}", c.session.hold),
            exhale: format!("{:.2}", c.session.exhale),
            ratio: format!("{} : {}", number(c.hold_ratio), number(c.exhale_ratio)),
            distance: number(c.distance),
            category: c.category,
            style: StyleHint::for_category(c.category),
            date: c.session.date,
        })
        .collect()
}

/// Display strings for the aggregate stats.
#[must_use]
pub fn stat_strings(stats: &BreathStats) -> StatStrings {
    StatStrings {
        avg_inhale: format!("{:.2}s", stats.avg_inhale),
        avg_hold: format!("{:.2}s", stats.avg_hold),
        avg_exhale: format!("{:.2}s", stats.avg_exhale),
        total: stats.total.to_string(),
    }
}

fn number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "∞".to_string()
    }
}
