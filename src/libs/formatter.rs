//! Execution-time formatting for analytics reports.
//!
//! The storage layer reports the average execution time of completed
//! tasks as a compact unit string (`"2h30m0s"`, `"45m0s"`, `"0s"`). This
//! module parses that representation into a structured duration and
//! renders it as the decomposed human-readable form used in reports.
//!
//! Parsing is strict: components must appear in `h`, `m`, `s` order, each
//! at most once, and any leftover input is an error. Missing components
//! default to zero, so `"45m"` and `"1h2s"` are both accepted.

use chrono::Duration;
use thiserror::Error;

/// Raised when an execution-time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("не удалось распарсить строку времени: {0}")]
pub struct TimeFormatError(pub String);

/// Parses a compact unit string (`"2h30m0s"`) into a duration.
///
/// Accepts any subset of hour/minute/second components in order, with an
/// optional fractional part (`"1m30.5s"`). Whole-second precision is
/// kept; fractions are truncated.
pub fn parse_compact_duration(raw: &str) -> Result<Duration, TimeFormatError> {
    let value = raw.trim();
    let bytes = value.as_bytes();
    let mut pos = 0;
    let mut rank = 0;
    let mut total_secs = 0.0_f64;

    while pos < bytes.len() {
        let start = pos;
        while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
            pos += 1;
        }
        let number: f64 = value[start..pos].parse().map_err(|_| TimeFormatError(raw.to_string()))?;

        let unit = bytes.get(pos).copied().ok_or_else(|| TimeFormatError(raw.to_string()))?;
        pos += 1;
        let (factor, unit_rank) = match unit {
            b'h' => (3600.0, 1),
            b'm' => (60.0, 2),
            b's' => (1.0, 3),
            _ => return Err(TimeFormatError(raw.to_string())),
        };
        // components must not repeat or run backwards
        if unit_rank <= rank {
            return Err(TimeFormatError(raw.to_string()));
        }
        rank = unit_rank;
        total_secs += number * factor;
    }

    if rank == 0 {
        return Err(TimeFormatError(raw.to_string()));
    }

    Ok(Duration::seconds(total_secs as i64))
}

/// Renders a raw execution-time string as hours, minutes and seconds.
///
/// The message text matches the report format consumed by existing
/// clients.
pub fn format_execution_time(raw: &str) -> Result<String, TimeFormatError> {
    let duration = parse_compact_duration(raw)?;
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;

    Ok(format!("{} часов {} минут {} секунд", hours, minutes, seconds))
}

/// Formats a duration as the compact unit string the parser accepts.
///
/// Leading zero components are omitted, inner and trailing ones are kept:
/// `"2h0m30s"`, `"45m0s"`, `"0s"`.
pub fn compact_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if !out.is_empty() || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}
