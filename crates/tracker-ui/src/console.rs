//! Console implementation of the core's interaction seam.
//!
//! The prompt is a plain stdin line read; the delta message is echoed to
//! stdout and carried into the chart screen as a banner.

use std::io::{self, BufRead, Write};

use tracker_core::error::{Result, TrackerError};
use tracker_core::interaction::{parse_weight_input, Interaction};
use tracker_core::models::Dataset;
use tracker_core::report::DeltaReport;

use crate::app::ChartApp;
use crate::themes::Theme;

/// Wording matches the original desktop prompt.
const PROMPT: &str = "Please enter today's weight (kg) (or press Enter to view the chart): ";

/// Terminal-backed [`Interaction`]: stdin prompt, stdout message, ratatui
/// chart.
pub struct ConsoleInteraction {
    theme: Theme,
    last_report: Option<DeltaReport>,
}

impl ConsoleInteraction {
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            last_report: None,
        }
    }
}

impl Interaction for ConsoleInteraction {
    fn prompt_weight(&mut self) -> Result<Option<f64>> {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let mut line = String::new();
        // EOF (0 bytes read) counts as declining the prompt.
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        parse_weight_input(&line)
    }

    fn show_message(&mut self, report: &DeltaReport) {
        println!("{}", report.message);
        self.last_report = Some(report.clone());
    }

    fn show_chart(&mut self, dataset: &Dataset) -> Result<()> {
        let app = ChartApp::new(
            self.theme.clone(),
            dataset.clone(),
            self.last_report.take(),
        );
        app.run()
            .map_err(|e| TrackerError::Terminal(e.to_string()))
    }
}
