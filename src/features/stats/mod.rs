//! Statistics module.
//!
//! Provides aggregate timing statistics:
//! - Per-phase average durations
//! - Total timing count

pub mod metrics;

pub use metrics::BreathStats;
