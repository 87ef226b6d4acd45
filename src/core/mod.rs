//! Core abstractions for breathe.
//!
//! This module provides the phase label set, rounding rules, and the
//! timestamp handling shared across features.

mod datetime;
mod phase;
pub mod rounding;
mod traits;

pub use datetime::parse_store_timestamp;
pub use phase::Phase;
pub use traits::{sort_newest_first, Dated};
