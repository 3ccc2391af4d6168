//! Storage layer for the weight tracker.
//!
//! Responsible for reading and rewriting the CSV weight log, appending new
//! observations, and computing the delta against the previous entry.

pub mod store;

pub use store::WeightStore;

pub use tracker_core as core;
