//! Duration formatting for display.
//!
//! Durations come out of the engine as whole seconds; the display layer
//! shows running timers as "HH:MM:SS" and persisted totals as "HH:MM".
//! Negative inputs format as zero, the engine clamps before display anyway.

use chrono::Duration;

/// Formats integer seconds as "HH:MM:SS".
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}

/// Formats a duration as "HH:MM".
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a persisted minute total as "HH:MM".
pub fn format_minutes(minutes: i64) -> String {
    format_duration(&Duration::minutes(minutes))
}
