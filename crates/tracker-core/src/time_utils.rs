use chrono::{Local, NaiveDateTime, Timelike};

/// Wire format for the `Time` column of the backing file.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time, truncated to whole seconds.
///
/// Truncation keeps in-memory observations equal to their persisted form,
/// which only carries second precision.
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a timestamp in the backing-file wire format.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIME_FORMAT).to_string()
}

/// Parse a `Time` cell leniently.
///
/// The canonical format is tried first, then a small table of variants seen
/// in hand-edited files. Returns `None` for empty or unrecognised strings;
/// callers treat such rows as having an invalid timestamp rather than
/// failing the whole read.
pub fn parse_time_cell(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    const FMTS: &[&str] = &[
        TIME_FORMAT,
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];

    for fmt in FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    // Date-only cells are midnight of that day.
    if let Ok(d) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    None
}
