//! Workload bucketer.
//!
//! Composes the shift calculator and the schedule resolver to group a
//! heterogeneous collection of work items into the four shift buckets of a
//! viewing date. A ranged item may legitimately land in more than one
//! bucket; an item with no resolvable schedule is reported as skipped.
//!
//! The carry-over rule keeps short-lived ad-hoc items visible near a shift
//! boundary: when the operator views the current real-world date, an
//! eligible item whose instant falls in tomorrow's shift of the same id
//! within the lookahead window still shows on today's board instead of
//! disappearing until midnight rolls over. Eligibility is a pluggable
//! policy, since the intent (keep short items visible) is clearer than any
//! particular detection mechanism.

use crate::libs::schedule::{self, Resolved};
use crate::libs::shift::{shift_containing, shifts_for, Shift, ShiftId};
use crate::libs::work_item::WorkItem;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Default lookahead for the carry-over rule, one shift length.
pub const CARRY_OVER_LOOKAHEAD_HOURS: i64 = 6;

pub trait CarryOverPolicy {
    fn eligible(&self, item: &WorkItem) -> bool;
}

/// Default policy: items flagged as ad-hoc (quick items and sub-items of
/// ad-hoc parents carry the flag) stay visible across the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdHocCarryOver;

impl CarryOverPolicy for AdHocCarryOver {
    fn eligible(&self, item: &WorkItem) -> bool {
        item.ad_hoc
    }
}

/// One bucketed item, with the carry-over provenance kept for display.
#[derive(Debug, Clone)]
pub struct Bucketed {
    pub item: WorkItem,
    pub carried_over: bool,
}

/// The computed board for one viewing date.
#[derive(Debug, Clone)]
pub struct ShiftBoard {
    pub viewing_date: NaiveDate,
    pub shifts: [Shift; 4],
    pub buckets: BTreeMap<ShiftId, Vec<Bucketed>>,
    /// Ids of items excluded because their schedule was unresolvable.
    pub skipped: Vec<i64>,
}

pub fn bucket(items: &[WorkItem], viewing_date: NaiveDate, now: NaiveDateTime, policy: &dyn CarryOverPolicy, lookahead: Duration) -> ShiftBoard {
    let today_shifts = shifts_for(viewing_date);
    let tomorrow_shifts = shifts_for(viewing_date + Duration::days(1));
    let viewing_is_today = viewing_date == now.date();

    let mut buckets: BTreeMap<ShiftId, Vec<Bucketed>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for item in items {
        let instants = match schedule::resolve(item, viewing_date) {
            Resolved::Instants(instants) => instants,
            Resolved::Unresolvable => {
                skipped.push(item.id.unwrap_or_default());
                continue;
            }
        };

        for instant in instants {
            if let Some(shift) = shift_containing(instant, &today_shifts) {
                push_once(&mut buckets, shift.id, item, false);
                continue;
            }

            // Next-day carry-over: only on the live view, only within the
            // lookahead, only for eligible items.
            if viewing_is_today && instant > now && instant - now <= lookahead && policy.eligible(item) {
                if let Some(shift) = shift_containing(instant, &tomorrow_shifts) {
                    push_once(&mut buckets, shift.id, item, true);
                }
            }
            // Anything else belongs to a different day's board.
        }
    }

    ShiftBoard {
        viewing_date,
        shifts: today_shifts,
        buckets,
        skipped,
    }
}

/// A multi-hour range can put several instants into the same shift; the
/// item still appears once per bucket.
fn push_once(buckets: &mut BTreeMap<ShiftId, Vec<Bucketed>>, shift_id: ShiftId, item: &WorkItem, carried_over: bool) {
    let bucket = buckets.entry(shift_id).or_default();
    if !bucket.iter().any(|existing| existing.item.id == item.id) {
        bucket.push(Bucketed {
            item: item.clone(),
            carried_over,
        });
    }
}
