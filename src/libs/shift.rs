//! Shift window calculator.
//!
//! Four fixed 6-hour windows tile every calendar day:
//! A=[00:00,06:00), B=[06:00,12:00), C=[12:00,18:00), D=[18:00,24:00).
//! Ends are exclusive, so an item scheduled at exactly 06:00 belongs to
//! shift B and no instant is ever double-counted or dropped at a boundary.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const SHIFT_HOURS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShiftId {
    A,
    B,
    C,
    D,
}

impl ShiftId {
    pub fn all() -> [ShiftId; 4] {
        [ShiftId::A, ShiftId::B, ShiftId::C, ShiftId::D]
    }

    pub fn label(&self) -> char {
        match self {
            ShiftId::A => 'A',
            ShiftId::B => 'B',
            ShiftId::C => 'C',
            ShiftId::D => 'D',
        }
    }
}

/// One derived shift window. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub id: ShiftId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Shift {
    /// Half-open containment test: `start <= instant < end`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// The four shift windows of the anchor date, in order.
pub fn shifts_for(anchor: NaiveDate) -> [Shift; 4] {
    let midnight = anchor.and_time(NaiveTime::MIN);
    let mut index = 0;
    ShiftId::all().map(|id| {
        let start = midnight + Duration::hours(SHIFT_HOURS * index);
        index += 1;
        Shift {
            id,
            start,
            end: start + Duration::hours(SHIFT_HOURS),
        }
    })
}

/// The unique shift of the set containing the instant, if any.
pub fn shift_containing(instant: NaiveDateTime, shifts: &[Shift; 4]) -> Option<&Shift> {
    shifts.iter().find(|shift| shift.contains(instant))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn four_shifts_tile_the_day() {
        let shifts = shifts_for(day());
        assert_eq!(shifts[0].start, day().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(shifts[3].end, day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
        for window in shifts.windows(2) {
            assert_eq!(window[0].end, window[1].start);
        }
    }

    #[test]
    fn boundary_instant_belongs_to_the_later_shift() {
        let shifts = shifts_for(day());
        let six = day().and_hms_opt(6, 0, 0).unwrap();
        assert_eq!(shift_containing(six, &shifts).map(|s| s.id), Some(ShiftId::B));
        let midnight = day().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(shift_containing(midnight, &shifts).map(|s| s.id), Some(ShiftId::A));
    }

    #[test]
    fn next_midnight_is_outside_the_day() {
        let shifts = shifts_for(day());
        let next_midnight = day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert!(shift_containing(next_midnight, &shifts).is_none());
    }
}
