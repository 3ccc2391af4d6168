//! CSV-backed durable log of weight observations.
//!
//! The backing file has two columns, `Time` and `Weight (kg)`, and is kept
//! in ascending chronological order on disk. Every mutation is a full
//! read-sort-rewrite cycle; the rewrite goes through a temp file and a
//! rename so a failed write leaves the previous file intact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tracker_core::error::{Result, TrackerError};
use tracker_core::models::{Dataset, Observation, ReconcileResult};

/// One row of the backing file, exactly as persisted.
#[derive(Debug, Serialize, Deserialize)]
struct WeightRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Weight (kg)")]
    weight: f64,
}

/// Durable append-only log of observations at a fixed path.
///
/// The store holds no state besides the path; every operation re-reads the
/// file, so concurrent writers are not supported (last writer wins).
pub struct WeightStore {
    path: PathBuf,
}

impl WeightStore {
    /// Create a store backed by `path`. The file is not touched until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Append a new observation stamped with the current time, re-sort the
    /// whole dataset chronologically, and rewrite the file.
    ///
    /// The comparison baseline is the last row in on-disk order *before*
    /// sorting, which is not necessarily the chronologically latest
    /// observation when historical rows were edited out of order. That
    /// behavior is intentional and kept as-is.
    pub fn append_and_reconcile(&self, value: f64) -> Result<ReconcileResult> {
        let mut dataset = if self.path.exists() {
            self.read_dataset()?
        } else {
            debug!("No weight log at {}, starting fresh", self.path.display());
            Dataset::empty()
        };

        let result = match dataset.last() {
            Some(previous) => ReconcileResult::with_delta(value - previous.weight),
            None => ReconcileResult::first_entry(),
        };

        dataset.push(Observation::recorded_now(value));
        dataset.sort_chronological();
        self.write_dataset(&dataset)?;

        debug!(
            "Recorded {} kg ({} rows total)",
            value,
            dataset.len()
        );

        Ok(result)
    }

    /// Load the full dataset, sorted ascending by timestamp.
    ///
    /// Errors with [`TrackerError::EmptyDataset`] when the backing file does
    /// not exist yet.
    pub fn load_all(&self) -> Result<Dataset> {
        if !self.path.exists() {
            return Err(TrackerError::EmptyDataset(self.path.clone()));
        }
        let mut dataset = self.read_dataset()?;
        dataset.sort_chronological();
        Ok(dataset)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Read the backing file in on-disk row order.
    ///
    /// A malformed `Time` cell never fails the read; the row is kept with an
    /// invalid timestamp and its cell text preserved. A malformed weight
    /// cell or broken CSV structure is a [`TrackerError::StorageRead`].
    fn read_dataset(&self) -> Result<Dataset> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|source| TrackerError::StorageRead {
                path: self.path.clone(),
                source,
            })?;

        let mut dataset = Dataset::empty();
        for row in reader.deserialize::<WeightRow>() {
            let row = row.map_err(|source| TrackerError::StorageRead {
                path: self.path.clone(),
                source,
            })?;
            let obs = Observation::from_row(&row.time, row.weight);
            if obs.timestamp.is_none() {
                warn!(
                    "Unparseable timestamp {:?} in {}; row kept with invalid time",
                    row.time,
                    self.path.display()
                );
            }
            dataset.push(obs);
        }

        debug!(
            "Loaded {} rows from {}",
            dataset.len(),
            self.path.display()
        );

        Ok(dataset)
    }

    /// Rewrite the whole backing file from `dataset`, via temp file + rename.
    fn write_dataset(&self, dataset: &Dataset) -> Result<()> {
        let storage_write = |source: csv::Error| TrackerError::StorageWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| storage_write(csv::Error::from(e)))?;
            }
        }

        let tmp = self.path.with_extension("csv.tmp");
        let mut writer = csv::Writer::from_path(&tmp).map_err(storage_write)?;
        for obs in &dataset.observations {
            writer
                .serialize(WeightRow {
                    time: obs.time_text.clone(),
                    weight: obs.weight,
                })
                .map_err(storage_write)?;
        }
        writer.flush().map_err(|e| storage_write(csv::Error::from(e)))?;
        drop(writer);

        std::fs::rename(&tmp, &self.path).map_err(|e| storage_write(csv::Error::from(e)))?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
