//! Delta classification and message formatting.
//!
//! Turns a [`ReconcileResult`] into one of three user-facing messages:
//! increase, decrease, or no change. The first-ever entry produces no
//! message at all.

use crate::models::ReconcileResult;

/// Direction of the weight change relative to the previous entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaClass {
    /// New weight is strictly greater than the previous one.
    Increase,
    /// New weight is strictly less than the previous one.
    Decrease,
    /// New weight is exactly equal to the previous one.
    NoChange,
}

/// A classified delta together with its display message.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaReport {
    pub class: DeltaClass,
    /// Absolute size of the change in kilograms.
    pub magnitude: f64,
    /// Fully formatted user-facing message.
    pub message: String,
}

/// Classify a reconcile result into a delta report.
///
/// Returns `None` when there was no previous entry to compare against;
/// callers must treat that as a no-op, not an error.
pub fn classify_delta(result: &ReconcileResult) -> Option<DeltaReport> {
    if !result.has_previous {
        return None;
    }
    let delta = result.delta?;

    let report = if delta > 0.0 {
        DeltaReport {
            class: DeltaClass::Increase,
            magnitude: delta,
            message: format!(
                "Increased by {:.2} kg since last time, consider increasing your exercise!",
                delta
            ),
        }
    } else if delta < 0.0 {
        DeltaReport {
            class: DeltaClass::Decrease,
            magnitude: delta.abs(),
            message: format!(
                "Decreased by {:.2} kg since last time, keep up the good work!",
                delta.abs()
            ),
        }
    } else {
        DeltaReport {
            class: DeltaClass::NoChange,
            magnitude: 0.0,
            message: "No change in weight, keep maintaining your habits!".to_string(),
        }
    };

    Some(report)
}
