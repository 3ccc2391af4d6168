use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// A single timestamped weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Parsed timestamp, or `None` when the persisted `Time` cell could not
    /// be parsed. Invalid timestamps sort before all valid ones.
    pub timestamp: Option<NaiveDateTime>,
    /// The `Time` cell exactly as persisted. Kept so rows with malformed
    /// timestamps survive a rewrite byte-for-byte.
    pub time_text: String,
    /// Measured weight in kilograms.
    pub weight: f64,
}

impl Observation {
    /// Build an observation stamped with the current local time.
    pub fn recorded_now(weight: f64) -> Self {
        let now = time_utils::now_local();
        Self {
            timestamp: Some(now),
            time_text: time_utils::format_timestamp(now),
            weight,
        }
    }

    /// Build an observation from a persisted row, parsing the time cell
    /// leniently. A cell that fails to parse yields `timestamp: None`.
    pub fn from_row(time_text: &str, weight: f64) -> Self {
        Self {
            timestamp: time_utils::parse_time_cell(time_text),
            time_text: time_text.to_string(),
            weight,
        }
    }
}

/// The full ordered collection of observations.
///
/// Invariant: sorted ascending by timestamp after any mutation, with
/// unparseable timestamps first. [`Dataset::sort_chronological`] restores
/// the invariant; the store calls it after every append and load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Observations in chronological order.
    pub observations: Vec<Observation>,
}

impl Dataset {
    /// An empty dataset (first run, nothing persisted yet).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Last observation in current order, if any.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Append one observation without re-sorting.
    pub fn push(&mut self, obs: Observation) {
        self.observations.push(obs);
    }

    /// Stable sort ascending by timestamp.
    ///
    /// `Option<NaiveDateTime>` orders `None` first, so rows whose persisted
    /// timestamp failed to parse end up at the front; ties and invalid rows
    /// keep their relative order.
    pub fn sort_chronological(&mut self) {
        self.observations.sort_by_key(|o| o.timestamp);
    }
}

/// Outcome of appending one observation to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconcileResult {
    /// `false` only for the first-ever entry (no persisted file).
    pub has_previous: bool,
    /// `new weight - previous weight`, present when `has_previous` is true.
    ///
    /// The baseline is the last row in on-disk order before this append,
    /// not necessarily the chronologically latest observation.
    pub delta: Option<f64>,
}

impl ReconcileResult {
    /// Result for the first-ever entry.
    pub fn first_entry() -> Self {
        Self {
            has_previous: false,
            delta: None,
        }
    }

    /// Result for an append with a prior row to compare against.
    pub fn with_delta(delta: f64) -> Self {
        Self {
            has_previous: true,
            delta: Some(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(time_text: &str, weight: f64) -> Observation {
        Observation::from_row(time_text, weight)
    }

    #[test]
    fn test_observation_recorded_now_is_valid() {
        let o = Observation::recorded_now(70.5);
        assert!(o.timestamp.is_some());
        assert_eq!(o.weight, 70.5);
        // The text form must round-trip to the same instant.
        assert_eq!(
            crate::time_utils::parse_time_cell(&o.time_text),
            o.timestamp
        );
    }

    #[test]
    fn test_observation_from_row_valid() {
        let o = obs("2024-01-15 10:30:00", 71.2);
        assert_eq!(
            o.timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
        );
        assert_eq!(o.time_text, "2024-01-15 10:30:00");
    }

    #[test]
    fn test_observation_from_row_malformed_keeps_text() {
        let o = obs("not a date", 68.0);
        assert!(o.timestamp.is_none());
        assert_eq!(o.time_text, "not a date");
        assert_eq!(o.weight, 68.0);
    }

    #[test]
    fn test_sort_chronological_orders_ascending() {
        let mut ds = Dataset::empty();
        ds.push(obs("2024-01-15 12:00:00", 71.0));
        ds.push(obs("2024-01-15 08:00:00", 70.0));
        ds.push(obs("2024-01-16 08:00:00", 72.0));
        ds.sort_chronological();

        let weights: Vec<f64> = ds.observations.iter().map(|o| o.weight).collect();
        assert_eq!(weights, vec![70.0, 71.0, 72.0]);
    }

    #[test]
    fn test_sort_chronological_invalid_rows_first() {
        let mut ds = Dataset::empty();
        ds.push(obs("2024-01-15 08:00:00", 70.0));
        ds.push(obs("garbled", 65.0));
        ds.push(obs("2024-01-14 08:00:00", 69.0));
        ds.sort_chronological();

        assert!(ds.observations[0].timestamp.is_none());
        assert_eq!(ds.observations[0].weight, 65.0);
        assert_eq!(ds.observations[1].weight, 69.0);
        assert_eq!(ds.observations[2].weight, 70.0);
    }

    #[test]
    fn test_sort_chronological_is_stable_for_ties() {
        let mut ds = Dataset::empty();
        ds.push(obs("2024-01-15 08:00:00", 1.0));
        ds.push(obs("2024-01-15 08:00:00", 2.0));
        ds.push(obs("2024-01-15 08:00:00", 3.0));
        ds.sort_chronological();

        let weights: Vec<f64> = ds.observations.iter().map(|o| o.weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reconcile_result_first_entry() {
        let r = ReconcileResult::first_entry();
        assert!(!r.has_previous);
        assert!(r.delta.is_none());
    }

    #[test]
    fn test_reconcile_result_with_delta() {
        let r = ReconcileResult::with_delta(-2.2);
        assert!(r.has_previous);
        assert_eq!(r.delta, Some(-2.2));
    }
}
