#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use opshift::libs::bucket::{bucket, AdHocCarryOver, CarryOverPolicy};
    use opshift::libs::shift::ShiftId;
    use opshift::libs::work_item::{ItemKind, WorkItem};

    fn viewing() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    fn item(id: i64, name: &str, kind: ItemKind) -> WorkItem {
        let mut item = WorkItem::new(name, kind);
        item.id = Some(id);
        item
    }

    fn lookahead() -> Duration {
        Duration::hours(6)
    }

    #[test]
    fn late_evening_item_without_date_lands_in_todays_shift_d() {
        let mut late = item(1, "evening check", ItemKind::Task);
        late.scheduled_time = Some("23:30".to_string());

        // Viewed on 2024-01-01; must land in shift D of that day, not
        // shift A of the next.
        let board = bucket(&[late], viewing(), at(viewing(), 10, 0), &AdHocCarryOver, lookahead());
        let d_bucket = board.buckets.get(&ShiftId::D).expect("shift D populated");
        assert_eq!(d_bucket.len(), 1);
        assert!(!d_bucket[0].carried_over);
        assert!(board.buckets.get(&ShiftId::A).is_none());
    }

    #[test]
    fn ranged_item_appears_once_per_touched_shift() {
        let mut ranged = item(2, "maintenance window", ItemKind::Task);
        ranged.slot_start = Some(at(viewing(), 13, 30));
        ranged.slot_end = Some(at(viewing(), 15, 30));

        let board = bucket(&[ranged], viewing(), at(viewing(), 10, 0), &AdHocCarryOver, lookahead());
        // Both fan-out instants (13:30, 14:30) are in shift C; the item
        // still shows once there.
        let c_bucket = board.buckets.get(&ShiftId::C).expect("shift C populated");
        assert_eq!(c_bucket.len(), 1);
    }

    #[test]
    fn range_spanning_two_shifts_lands_in_both() {
        let mut spanning = item(3, "long installation", ItemKind::Task);
        spanning.slot_start = Some(at(viewing(), 16, 0));
        spanning.slot_end = Some(at(viewing(), 20, 0));

        let board = bucket(&[spanning], viewing(), at(viewing(), 10, 0), &AdHocCarryOver, lookahead());
        assert!(board.buckets.get(&ShiftId::C).is_some());
        assert!(board.buckets.get(&ShiftId::D).is_some());
    }

    #[test]
    fn eligible_item_carries_over_within_the_lookahead() {
        let mut quick = item(4, "replace fuse", ItemKind::Quick);
        quick.ad_hoc = true;
        quick.scheduled_date = viewing().succ_opt();
        quick.scheduled_time = Some("03:00".to_string());

        // Live view at 22:00: tomorrow 03:00 is five hours ahead, inside
        // the lookahead, and shift A of tomorrow contains it.
        let board = bucket(&[quick], viewing(), at(viewing(), 22, 0), &AdHocCarryOver, lookahead());
        let a_bucket = board.buckets.get(&ShiftId::A).expect("carry-over into shift A");
        assert_eq!(a_bucket.len(), 1);
        assert!(a_bucket[0].carried_over);
    }

    #[test]
    fn ineligible_item_does_not_carry_over() {
        let mut task = item(5, "scheduled task", ItemKind::Task);
        task.scheduled_date = viewing().succ_opt();
        task.scheduled_time = Some("03:00".to_string());

        let board = bucket(&[task], viewing(), at(viewing(), 22, 0), &AdHocCarryOver, lookahead());
        assert!(board.buckets.is_empty());
    }

    #[test]
    fn carry_over_requires_the_live_view() {
        let mut quick = item(6, "swap label", ItemKind::Quick);
        quick.ad_hoc = true;
        quick.scheduled_date = viewing().succ_opt();
        quick.scheduled_time = Some("03:00".to_string());

        // Same instant, but the operator is looking at a historical date:
        // the real-world clock says a different day entirely.
        let real_now = at(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 22, 0);
        let board = bucket(&[quick], viewing(), real_now, &AdHocCarryOver, lookahead());
        assert!(board.buckets.is_empty());
    }

    #[test]
    fn carry_over_respects_the_lookahead_limit() {
        let mut quick = item(7, "distant quick item", ItemKind::Quick);
        quick.ad_hoc = true;
        quick.scheduled_date = viewing().succ_opt();
        quick.scheduled_time = Some("10:00".to_string());

        // 12 hours ahead of the 22:00 view; outside the 6-hour window.
        let board = bucket(&[quick], viewing(), at(viewing(), 22, 0), &AdHocCarryOver, lookahead());
        assert!(board.buckets.is_empty());
    }

    #[test]
    fn unresolvable_items_are_reported_as_skipped() {
        let mut broken = item(8, "no schedule", ItemKind::Task);
        broken.scheduled_time = Some("not a time".to_string());
        let unscheduled = item(9, "backlog item", ItemKind::Task);

        let board = bucket(&[broken, unscheduled], viewing(), at(viewing(), 10, 0), &AdHocCarryOver, lookahead());
        assert!(board.buckets.is_empty());
        assert_eq!(board.skipped, vec![8, 9]);
    }

    #[test]
    fn custom_policy_overrides_eligibility() {
        struct EverythingCarries;
        impl CarryOverPolicy for EverythingCarries {
            fn eligible(&self, _item: &WorkItem) -> bool {
                true
            }
        }

        let mut task = item(10, "ordinary task", ItemKind::Task);
        task.scheduled_date = viewing().succ_opt();
        task.scheduled_time = Some("02:00".to_string());

        let board = bucket(&[task], viewing(), at(viewing(), 22, 0), &EverythingCarries, lookahead());
        assert!(board.buckets.get(&ShiftId::A).is_some());
    }
}
