//! Breath-ratio classification.
//!
//! A session's hold and exhale are expressed as multiples of its inhale and
//! compared with the ideal 1:4:2 rhythm. The Euclidean distance from the
//! ideal point in (hold ratio, exhale ratio) space picks the category.

use std::iter::Enumerate;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::store::BreathSession;

/// Ideal hold as a multiple of inhale.
pub const IDEAL_HOLD_RATIO: f64 = 4.0;
/// Ideal exhale as a multiple of inhale.
pub const IDEAL_EXHALE_RATIO: f64 = 2.0;

/// Health category of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Distance of at most 1.
    Healthy,
    /// Distance above 1, at most 2.
    Borderline,
    /// Distance above 2, or not computable.
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl Category {
    /// Classify a distance. Boundaries belong to the better category.
    #[must_use]
    pub fn from_distance(distance: f64) -> Self {
        if distance <= 1.0 {
            Self::Healthy
        } else if distance <= 2.0 {
            Self::Borderline
        } else {
            // Also catches NaN.
            Self::NeedsAttention
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Borderline => "Borderline",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratios and distance of one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioScore {
    pub hold_ratio: f64,
    pub exhale_ratio: f64,
    pub distance: f64,
}

impl RatioScore {
    /// Score an inhale/hold/exhale triple.
    ///
    /// An inhale that is zero, negative, or not finite cannot anchor a
    /// ratio; both ratios and the distance become `+inf`. The distance is
    /// never NaN.
    #[must_use]
    pub fn compute(inhale: f64, hold: f64, exhale: f64) -> Self {
        if !(inhale.is_finite() && inhale > 0.0) {
            return Self::degenerate();
        }

        let hold_ratio = hold / inhale;
        let exhale_ratio = exhale / inhale;
        let distance = (hold_ratio - IDEAL_HOLD_RATIO).hypot(exhale_ratio - IDEAL_EXHALE_RATIO);

        Self {
            hold_ratio,
            exhale_ratio,
            distance: if distance.is_nan() {
                f64::INFINITY
            } else {
                distance
            },
        }
    }

    const fn degenerate() -> Self {
        Self {
            hold_ratio: f64::INFINITY,
            exhale_ratio: f64::INFINITY,
            distance: f64::INFINITY,
        }
    }

    /// Category for this score.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::from_distance(self.distance)
    }
}

/// A session with its derived score. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSession {
    /// 1-based position in the Store's order.
    pub index: usize,
    pub session: BreathSession,
    pub hold_ratio: f64,
    pub exhale_ratio: f64,
    pub distance: f64,
    pub category: Category,
}

impl ClassifiedSession {
    /// Score one session at the given 1-based position.
    #[must_use]
    pub fn new(index: usize, session: &BreathSession) -> Self {
        let score = RatioScore::compute(session.inhale, session.hold, session.exhale);
        Self {
            index,
            session: session.clone(),
            hold_ratio: score.hold_ratio,
            exhale_ratio: score.exhale_ratio,
            distance: score.distance,
            category: score.category(),
        }
    }
}

/// Lazily classified sessions, in input order.
#[derive(Debug, Clone)]
pub struct ClassifiedSessions<'a> {
    inner: Enumerate<slice::Iter<'a, BreathSession>>,
}

impl ClassifiedSessions<'_> {
    /// True when there is nothing left to classify.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

impl Iterator for ClassifiedSessions<'_> {
    type Item = ClassifiedSession;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(i, session)| ClassifiedSession::new(i + 1, session))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ClassifiedSessions<'_> {}

/// Classify sessions without reordering them.
#[must_use]
pub fn classify_sessions(sessions: &[BreathSession]) -> ClassifiedSessions<'_> {
    ClassifiedSessions {
        inner: sessions.iter().enumerate(),
    }
}
