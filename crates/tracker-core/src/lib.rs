//! Core domain layer for the weight tracker.
//!
//! Provides the observation and dataset models, the error taxonomy, delta
//! classification and message formatting, timestamp parsing helpers, CLI
//! settings, and the [`Interaction`](interaction::Interaction) seam that
//! keeps the record-and-report flow free of any terminal dependency.

pub mod error;
pub mod interaction;
pub mod models;
pub mod report;
pub mod settings;
pub mod time_utils;

pub use error::{Result, TrackerError};
