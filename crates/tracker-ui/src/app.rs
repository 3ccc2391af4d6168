//! Chart-screen event loop.
//!
//! [`ChartApp`] owns the theme, the dataset to plot, and an optional delta
//! report shown as a banner above the chart. The screen is static; the loop
//! just redraws on resize and waits for a quit key.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use tracker_core::models::Dataset;
use tracker_core::report::DeltaReport;

use crate::chart_view;
use crate::themes::Theme;

/// Full-screen chart view with an optional delta banner.
pub struct ChartApp {
    theme: Theme,
    dataset: Dataset,
    report: Option<DeltaReport>,
}

impl ChartApp {
    pub fn new(theme: Theme, dataset: Dataset, report: Option<DeltaReport>) -> Self {
        Self {
            theme,
            dataset,
            report,
        }
    }

    /// Show the chart until the user quits with `q`, `Esc`, or `Ctrl+C`.
    ///
    /// Raw mode and the alternate screen are restored unconditionally before
    /// returning.
    pub fn run(&self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break Ok(()),
                        _ => {}
                    }
                }
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Render one frame: banner (when a delta was reported) above the chart.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        match &self.report {
            Some(report) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .split(area);
                chart_view::render_banner(frame, chunks[0], &self.theme, report);
                chart_view::render_chart(frame, chunks[1], &self.theme, &self.dataset);
            }
            None => {
                chart_view::render_chart(frame, area, &self.theme, &self.dataset);
            }
        }
    }
}
