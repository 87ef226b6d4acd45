//! Feature implementations for breathe.
//!
//! - Phase stopwatch and saving measurements
//! - Session assembly and ratio classification
//! - Per-phase statistics

pub mod analysis;
pub mod stats;
pub mod stopwatch;
