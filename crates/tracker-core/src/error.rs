use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the weight tracker.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The interactive input was non-empty but not a parseable number.
    #[error("Invalid weight input: {0:?} is not a number")]
    InvalidInput(String),

    /// The backing file exists but could not be read or parsed as tabular
    /// data.
    #[error("Failed to read weight log {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The backing file could not be persisted.
    #[error("Failed to write weight log {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The backing file does not exist yet, so there is nothing to chart.
    #[error("No weight data recorded yet at {0}")]
    EmptyDataset(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the tracker crates.
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = TrackerError::InvalidInput("seventy".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Invalid weight input: \"seventy\" is not a number");
    }

    #[test]
    fn test_error_display_storage_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TrackerError::StorageRead {
            path: PathBuf::from("/some/weight_log.csv"),
            source: csv::Error::from(io_err),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read weight log"));
        assert!(msg.contains("/some/weight_log.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_storage_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrackerError::StorageWrite {
            path: PathBuf::from("/readonly/weight_log.csv"),
            source: csv::Error::from(io_err),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write weight log"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_empty_dataset() {
        let err = TrackerError::EmptyDataset(PathBuf::from("/missing/weight_log.csv"));
        let msg = err.to_string();
        assert_eq!(msg, "No weight data recorded yet at /missing/weight_log.csv");
    }

    #[test]
    fn test_error_display_terminal() {
        let err = TrackerError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TrackerError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
