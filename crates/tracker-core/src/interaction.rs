//! The seam between the record-and-report flow and the terminal.
//!
//! The binary drives everything through [`Interaction`], so the core flow
//! can be exercised headlessly in tests with a scripted implementation.

use crate::error::{Result, TrackerError};
use crate::models::Dataset;
use crate::report::DeltaReport;

/// Synchronous user-interaction collaborator: one prompt, one message
/// display, one chart display. All calls block.
pub trait Interaction {
    /// Ask the user for today's weight.
    ///
    /// Returns `Ok(None)` when the user declines (empty input), which
    /// degrades the run to view-only mode. Non-empty input that is not a
    /// number is an [`TrackerError::InvalidInput`] error.
    fn prompt_weight(&mut self) -> Result<Option<f64>>;

    /// Show the classified delta message. Fire-and-forget.
    fn show_message(&mut self, report: &DeltaReport);

    /// Render the chart for `dataset` and block until dismissed.
    ///
    /// Must tolerate empty and single-point datasets.
    fn show_chart(&mut self, dataset: &Dataset) -> Result<()>;
}

/// Parse raw prompt input into an optional weight.
///
/// Empty or whitespace-only input means "no value provided". Anything else
/// must parse as a finite floating-point number.
pub fn parse_weight_input(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(TrackerError::InvalidInput(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_input_plain() {
        assert_eq!(parse_weight_input("70.5").unwrap(), Some(70.5));
    }

    #[test]
    fn test_parse_weight_input_trims_whitespace() {
        assert_eq!(parse_weight_input("  71.2 \n").unwrap(), Some(71.2));
    }

    #[test]
    fn test_parse_weight_input_integer_form() {
        assert_eq!(parse_weight_input("69").unwrap(), Some(69.0));
    }

    #[test]
    fn test_parse_weight_input_empty_is_view_only() {
        assert_eq!(parse_weight_input("").unwrap(), None);
        assert_eq!(parse_weight_input("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_weight_input_garbage_errors() {
        let err = parse_weight_input("seventy").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput(s) if s == "seventy"));
    }

    #[test]
    fn test_parse_weight_input_non_finite_errors() {
        assert!(parse_weight_input("NaN").is_err());
        assert!(parse_weight_input("inf").is_err());
    }
}
