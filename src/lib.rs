//! breathe - a breath-training stopwatch
//!
//! This crate measures inhalation, breath-hold, and exhalation, saves the
//! timings to a breath-data server, and scores sessions against the ideal
//! 1:4:2 breathing ratio.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod store;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BreatheError;
pub use store::{HttpStore, Store};
