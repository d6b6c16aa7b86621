//! Scheduled-time resolver.
//!
//! Normalizes the loose scheduling fields of a work item into concrete
//! instants. Three stored shapes occur:
//!
//! - a reserved `slot_start`/`slot_end` range, fanned out into one instant
//!   per hour the range touches so the item shows in every slot row it
//!   occupies;
//! - a full timestamp inside `scheduled_time` (recognized by a date/time
//!   separator character);
//! - a bare "HH:MM" time-of-day, combined with `scheduled_date` or, when
//!   that is absent, the viewing date.
//!
//! Malformed strings never escape this boundary; the item just resolves to
//! [`Resolved::Unresolvable`] and is reported as skipped, not as an error.

use crate::libs::messages::Message;
use crate::libs::work_item::WorkItem;
use crate::msg_debug;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Instants(Vec<NaiveDateTime>),
    Unresolvable,
}

pub fn resolve(item: &WorkItem, viewing_date: NaiveDate) -> Resolved {
    if let Some(slot_start) = item.slot_start {
        return Resolved::Instants(fan_out(slot_start, item.slot_end));
    }

    let Some(time_text) = item.scheduled_time.as_deref() else {
        msg_debug!(Message::UnresolvableSchedule(item.id.unwrap_or_default()));
        return Resolved::Unresolvable;
    };

    let instant = if has_date_marker(time_text) {
        parse_timestamp(time_text)
    } else {
        parse_time_of_day(time_text).map(|time| item.scheduled_date.unwrap_or(viewing_date).and_time(time))
    };

    match instant {
        Some(at) => Resolved::Instants(vec![at]),
        None => {
            msg_debug!(Message::UnresolvableSchedule(item.id.unwrap_or_default()));
            Resolved::Unresolvable
        }
    }
}

/// One instant per hour the reserved range touches. A range within a single
/// hour collapses to its start.
fn fan_out(slot_start: NaiveDateTime, slot_end: Option<NaiveDateTime>) -> Vec<NaiveDateTime> {
    let Some(slot_end) = slot_end.filter(|end| *end > slot_start) else {
        return vec![slot_start];
    };
    let mut instants = Vec::new();
    let mut cursor = slot_start;
    while cursor < slot_end {
        instants.push(cursor);
        cursor += Duration::hours(1);
    }
    instants
}

fn has_date_marker(text: &str) -> bool {
    text.contains('T') || text.contains(' ')
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
    FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text.trim(), "%H:%M:%S"))
        .ok()
}
