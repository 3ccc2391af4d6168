//! Terminal UI layer for the weight tracker.
//!
//! Provides themes, the trend-chart view, the chart event loop, and the
//! console implementation of the core's
//! [`Interaction`](tracker_core::interaction::Interaction) seam, built on
//! top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod console;
pub mod themes;

pub use tracker_core as core;
