#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use opshift::libs::shift::{shift_containing, shifts_for, ShiftId};

    #[test]
    fn every_sampled_instant_maps_to_exactly_one_shift_of_its_day() {
        // Deterministic sampling across several days; no instant may be
        // double-counted or dropped at a window boundary.
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut seed: u64 = 0x2545F4914F6CDD1D;

        for _ in 0..10_000 {
            // xorshift, good enough to scatter seconds over five days
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let offset_seconds = (seed % (5 * 24 * 3600)) as i64;

            let instant = base.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(offset_seconds);
            let shifts = shifts_for(instant.date());

            let matching: Vec<_> = shifts.iter().filter(|shift| shift.contains(instant)).collect();
            assert_eq!(matching.len(), 1, "instant {} matched {} shifts", instant, matching.len());
        }
    }

    #[test]
    fn boundaries_assign_to_the_opening_shift() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let shifts = shifts_for(day);

        let cases = [
            (0, 0, ShiftId::A),
            (5, 59, ShiftId::A),
            (6, 0, ShiftId::B),
            (11, 59, ShiftId::B),
            (12, 0, ShiftId::C),
            (17, 59, ShiftId::C),
            (18, 0, ShiftId::D),
            (23, 59, ShiftId::D),
        ];
        for (hour, minute, expected) in cases {
            let instant = day.and_hms_opt(hour, minute, 0).unwrap();
            assert_eq!(shift_containing(instant, &shifts).map(|s| s.id), Some(expected), "at {:02}:{:02}", hour, minute);
        }
    }
}
