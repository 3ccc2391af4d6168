use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Theme definition carrying all styles used by the tracker UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Chrome ───────────────────────────────────────────────────────────────
    pub title: Style,
    pub border: Style,
    pub text: Style,
    pub dim: Style,

    // ── Chart ────────────────────────────────────────────────────────────────
    pub chart_line: Style,
    pub axis: Style,
    pub axis_label: Style,

    // ── Delta banner ─────────────────────────────────────────────────────────
    pub banner_increase: Style,
    pub banner_decrease: Style,
    pub banner_neutral: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            chart_line: Style::default().fg(Color::Blue),
            axis: Style::default().fg(Color::Gray),
            axis_label: Style::default().fg(Color::Gray),
            banner_increase: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            banner_decrease: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            banner_neutral: Style::default().fg(Color::Cyan),
        }
    }

    pub fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            chart_line: Style::default().fg(Color::Blue),
            axis: Style::default().fg(Color::DarkGray),
            axis_label: Style::default().fg(Color::DarkGray),
            banner_increase: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            banner_decrease: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            banner_neutral: Style::default().fg(Color::Blue),
        }
    }

    /// Resolve a theme name (`"light"`, `"dark"`, or `"auto"`).
    ///
    /// `"auto"` and unknown names fall back to background detection.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}
