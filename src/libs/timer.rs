//! Pure interval math for the timer accounting engine.
//!
//! Everything here is side-effect free and takes `now` explicitly, so the
//! same arithmetic backs both the live `elapsed` query and the final
//! duration written at stop time. All math is whole seconds; only the
//! persisted figure is floor-divided to minutes.

use crate::libs::entry::TimeEntry;
use crate::libs::event_log::{self, Event, EventKind};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDateTime;

/// The lifecycle state of a time entry, derived from its row and log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    Closed,
}

pub fn state_of(entry: &TimeEntry) -> TimerState {
    if entry.end.is_some() {
        TimerState::Closed
    } else if event_log::ends_paused(&entry.event_log) {
        TimerState::Paused
    } else {
        TimerState::Running
    }
}

/// Total paused seconds over the event list, up to `now`.
///
/// Sums `(resume - pause)` over every completed pair; an unmatched trailing
/// pause contributes `(now - pause)`. Stray events that would break the
/// pause/resume alternation are ignored rather than double-counted; the
/// write path keeps the log coherent, this only guards old or hand-touched
/// rows.
pub fn paused_seconds(events: &[Event], now: NaiveDateTime) -> i64 {
    let mut total = 0i64;
    let mut pending_pause: Option<NaiveDateTime> = None;

    for event in events {
        match event.kind {
            EventKind::Pause => {
                if pending_pause.is_none() {
                    pending_pause = Some(event.at);
                }
            }
            EventKind::Resume => {
                if let Some(paused_at) = pending_pause.take() {
                    total += (event.at - paused_at).num_seconds();
                }
            }
            EventKind::Stop => {
                // A stop while paused ends the open pause at the stop
                // instant; nothing after a stop counts.
                if let Some(paused_at) = pending_pause.take() {
                    total += (event.at - paused_at).num_seconds();
                }
                return total;
            }
        }
    }

    if let Some(paused_at) = pending_pause {
        total += (now - paused_at).num_seconds();
    }

    total
}

/// Working seconds on an open entry as of `now`.
///
/// Clamped to zero: clock skew or a malformed log must never surface a
/// negative figure to the display layer.
pub fn elapsed_seconds(entry: &TimeEntry, now: NaiveDateTime) -> i64 {
    let events = event_log::parse(&entry.event_log);
    let paused = paused_seconds(&events, now);
    let elapsed = (now - entry.start).num_seconds() - paused;
    if elapsed < 0 {
        msg_debug!(Message::NegativeDurationClamped(entry.id));
        return 0;
    }
    elapsed
}

/// Final persisted duration in whole minutes, floor-divided from the same
/// second-level figure `elapsed_seconds` reports.
pub fn final_duration_minutes(entry: &TimeEntry, now: NaiveDateTime) -> i64 {
    elapsed_seconds(entry, now) / 60
}
