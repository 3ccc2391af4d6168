//! Weight-trend chart rendering.
//!
//! Builds a ratatui line chart from a dataset: one point per observation in
//! chronological order, point markers joined by a line, titled axes, and
//! date-formatted x-axis labels. Rows whose persisted timestamp failed to
//! parse have no position on the time axis and are left off the chart (they
//! still live in the file).

use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph},
    Frame,
};

use tracker_core::models::Dataset;
use tracker_core::report::{DeltaClass, DeltaReport};

use crate::themes::Theme;

/// Chart title, shared with the window block.
pub const CHART_TITLE: &str = "Weight Change";

/// Notice shown instead of the chart when there is nothing to plot.
pub const EMPTY_NOTICE: &str = "No weight data recorded yet - enter a weight to start tracking";

// ── Point and bounds derivation ───────────────────────────────────────────────

/// Convert a dataset into `(epoch seconds, kg)` chart points.
///
/// Observations without a parseable timestamp are skipped.
pub fn chart_points(dataset: &Dataset) -> Vec<(f64, f64)> {
    dataset
        .observations
        .iter()
        .filter_map(|o| {
            o.timestamp
                .map(|ts| (ts.and_utc().timestamp() as f64, o.weight))
        })
        .collect()
}

/// Compute `([x_min, x_max], [y_min, y_max])` axis bounds for `points`.
///
/// Degenerate spans (a single point, or all points equal) are widened so the
/// chart never collapses to zero width or height: one hour on the time axis,
/// one kilogram on the weight axis. Non-degenerate spans get a small margin
/// so extreme points do not sit on the frame.
pub fn chart_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let x_pad = f64::max((x_max - x_min) * 0.02, 1800.0);
    let y_pad = f64::max((y_max - y_min) * 0.1, 0.5);

    ([x_min - x_pad, x_max + x_pad], [y_min - y_pad, y_max + y_pad])
}

/// Format an x-axis bound (epoch seconds) as a date label.
fn format_x_label(epoch: f64) -> String {
    DateTime::from_timestamp(epoch.round() as i64, 0)
        .map(|dt| dt.naive_utc().format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Three evenly spaced date labels for the x axis.
pub fn x_labels(x_bounds: [f64; 2]) -> Vec<String> {
    let mid = (x_bounds[0] + x_bounds[1]) / 2.0;
    vec![
        format_x_label(x_bounds[0]),
        format_x_label(mid),
        format_x_label(x_bounds[1]),
    ]
}

/// Three evenly spaced weight labels for the y axis.
pub fn y_labels(y_bounds: [f64; 2]) -> Vec<String> {
    let mid = (y_bounds[0] + y_bounds[1]) / 2.0;
    vec![
        format!("{:.1}", y_bounds[0]),
        format!("{:.1}", mid),
        format!("{:.1}", y_bounds[1]),
    ]
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the delta banner into `area`.
pub fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme, report: &DeltaReport) {
    let style = match report.class {
        DeltaClass::Increase => theme.banner_increase,
        DeltaClass::Decrease => theme.banner_decrease,
        DeltaClass::NoChange => theme.banner_neutral,
    };
    let banner = Paragraph::new(Line::from(Span::styled(report.message.clone(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border));
    frame.render_widget(banner, area);
}

/// Render the trend chart (or the empty-state notice) into `area`.
pub fn render_chart(frame: &mut Frame, area: Rect, theme: &Theme, dataset: &Dataset) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(CHART_TITLE, theme.title));

    let points = chart_points(dataset);
    if points.is_empty() {
        let notice = Paragraph::new(Span::styled(EMPTY_NOTICE, theme.dim))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(notice, area);
        return;
    }

    let (x_bounds, y_bounds) = chart_bounds(&points);

    let series = ChartDataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Line)
        .style(theme.chart_line)
        .data(&points);

    let x_axis = Axis::default()
        .title(Span::styled("Time", theme.axis_label))
        .style(theme.axis)
        .bounds(x_bounds)
        .labels(
            x_labels(x_bounds)
                .into_iter()
                .map(|l| Span::styled(l, theme.axis_label)),
        );

    let y_axis = Axis::default()
        .title(Span::styled("Weight (kg)", theme.axis_label))
        .style(theme.axis)
        .bounds(y_bounds)
        .labels(
            y_labels(y_bounds)
                .into_iter()
                .map(|l| Span::styled(l, theme.axis_label)),
        );

    let chart = Chart::new(vec![series])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::models::Observation;

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        let mut ds = Dataset::empty();
        for (time, weight) in rows {
            ds.push(Observation::from_row(time, *weight));
        }
        ds
    }

    #[test]
    fn test_chart_points_one_per_valid_observation() {
        let ds = dataset(&[
            ("2024-01-01 08:00:00", 75.0),
            ("2024-01-02 08:00:00", 74.5),
        ]);
        let points = chart_points(&ds);
        assert_eq!(points.len(), 2);
        assert!(points[0].0 < points[1].0);
        assert_eq!(points[0].1, 75.0);
    }

    #[test]
    fn test_chart_points_skip_invalid_timestamps() {
        let ds = dataset(&[("garbled", 68.0), ("2024-01-01 08:00:00", 75.0)]);
        let points = chart_points(&ds);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].1, 75.0);
    }

    #[test]
    fn test_chart_points_empty_dataset() {
        assert!(chart_points(&Dataset::empty()).is_empty());
    }

    #[test]
    fn test_chart_bounds_single_point_widened() {
        let (x, y) = chart_bounds(&[(1_000_000.0, 70.0)]);
        assert!(x[0] < 1_000_000.0 && x[1] > 1_000_000.0);
        assert!(y[0] < 70.0 && y[1] > 70.0);
        // At least an hour of x span and a kilogram of y span.
        assert!(x[1] - x[0] >= 3600.0);
        assert!(y[1] - y[0] >= 1.0);
    }

    #[test]
    fn test_chart_bounds_enclose_all_points() {
        let points = vec![(0.0, 70.0), (86_400.0, 72.5), (172_800.0, 69.0)];
        let (x, y) = chart_bounds(&points);
        for &(px, py) in &points {
            assert!(px > x[0] && px < x[1]);
            assert!(py > y[0] && py < y[1]);
        }
    }

    #[test]
    fn test_chart_bounds_empty_is_unit_box() {
        let (x, y) = chart_bounds(&[]);
        assert_eq!(x, [0.0, 1.0]);
        assert_eq!(y, [0.0, 1.0]);
    }

    #[test]
    fn test_x_labels_are_date_formatted() {
        // 2024-01-01 00:00:00 UTC
        let labels = x_labels([1_704_067_200.0, 1_704_153_600.0]);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "2024-01-01 00:00");
        assert_eq!(labels[2], "2024-01-02 00:00");
    }

    #[test]
    fn test_y_labels_one_decimal() {
        let labels = y_labels([69.5, 72.5]);
        assert_eq!(labels, vec!["69.5", "71.0", "72.5"]);
    }
}
