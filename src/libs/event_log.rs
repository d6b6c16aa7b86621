//! Codec for the append-only pause/resume/stop event log.
//!
//! Each time entry carries its lifecycle history in a single text column so
//! the persisted shape stays compatible with the plain "log lines" format
//! the display layer already understands. One line per event:
//!
//! ```text
//! -- paused: 2025-01-15 09:10:00
//! -- resumed: 2025-01-15 09:15:00
//! -- stopped: 2025-01-15 09:20:00
//! ```
//!
//! Parsing is tolerant: lines (or prefixed free text) that match no marker
//! are skipped, because the upstream producer may prepend notes before the
//! first recognized marker. The parser never reorders events. When two
//! events carry the same timestamp (a coarse clock), line order is the
//! sequence of record, not timestamp order.

use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PAUSE_MARKER: &str = "-- paused:";
const RESUME_MARKER: &str = "-- resumed:";
const STOP_MARKER: &str = "-- stopped:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Pause,
    Resume,
    Stop,
}

impl EventKind {
    fn marker(&self) -> &'static str {
        match self {
            EventKind::Pause => PAUSE_MARKER,
            EventKind::Resume => RESUME_MARKER,
            EventKind::Stop => STOP_MARKER,
        }
    }
}

/// One recognized lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub at: NaiveDateTime,
}

/// Returns a new log with one more event appended. The input is treated as
/// an immutable value; it is never modified in place.
pub fn append_event(log: &str, kind: EventKind, at: NaiveDateTime) -> String {
    let line = format!("{} {}", kind.marker(), at.format(TIMESTAMP_FORMAT));
    if log.is_empty() {
        line
    } else {
        format!("{}\n{}", log, line)
    }
}

/// Parses a log into its ordered event list.
///
/// Unrecognized fragments are skipped, not errors. An empty log yields an
/// empty list. Events keep their line order even when timestamps collide.
pub fn parse(log: &str) -> Vec<Event> {
    let mut events = Vec::new();
    for line in log.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(event) => events.push(event),
            None => msg_debug!(Message::MalformedEventLine(line.to_string())),
        }
    }
    events
}

fn parse_line(line: &str) -> Option<Event> {
    // The marker may be preceded by free-form text; search, don't anchor.
    for kind in [EventKind::Pause, EventKind::Resume, EventKind::Stop] {
        if let Some(pos) = line.find(kind.marker()) {
            let rest = line[pos + kind.marker().len()..].trim();
            if let Ok(at) = NaiveDateTime::parse_from_str(rest, TIMESTAMP_FORMAT) {
                return Some(Event { kind, at });
            }
        }
    }
    None
}

/// Whether the log ends on an unmatched pause.
pub fn ends_paused(log: &str) -> bool {
    matches!(
        parse(log).last(),
        Some(Event {
            kind: EventKind::Pause,
            ..
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn append_then_parse_round_trips() {
        let log = append_event(&append_event("", EventKind::Pause, at(9, 10, 0)), EventKind::Resume, at(9, 15, 0));
        let events = parse(&log);
        assert_eq!(
            events,
            vec![
                Event {
                    kind: EventKind::Pause,
                    at: at(9, 10, 0)
                },
                Event {
                    kind: EventKind::Resume,
                    at: at(9, 15, 0)
                },
            ]
        );
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let log = format!(
            "operator note, do not parse\n{}\ngarbage -- paused: not-a-timestamp",
            append_event("", EventKind::Pause, at(9, 10, 0))
        );
        let events = parse(&log);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Pause);
    }

    #[test]
    fn prefixed_marker_still_parses() {
        let log = format!("note from upstream -- paused: {}", at(9, 10, 0).format(TIMESTAMP_FORMAT));
        assert_eq!(parse(&log).len(), 1);
    }

    #[test]
    fn identical_timestamps_keep_call_order() {
        // A coarse clock can stamp two events identically; the sequence of
        // record is line order, never a timestamp sort.
        let log = append_event(&append_event("", EventKind::Pause, at(9, 0, 0)), EventKind::Resume, at(9, 0, 0));
        let events = parse(&log);
        assert_eq!(events[0].kind, EventKind::Pause);
        assert_eq!(events[1].kind, EventKind::Resume);
    }

    #[test]
    fn empty_log_parses_to_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn ends_paused_detects_unmatched_pause() {
        let log = append_event("", EventKind::Pause, at(9, 10, 0));
        assert!(ends_paused(&log));
        let log = append_event(&log, EventKind::Resume, at(9, 15, 0));
        assert!(!ends_paused(&log));
    }
}
