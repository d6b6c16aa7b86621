#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use opshift::db::entries::Entries;
    use opshift::db::items::Items;
    use opshift::libs::clock::{Clock, FixedClock};
    use opshift::libs::errors::TimerError;
    use opshift::libs::event_log::{self, EventKind};
    use opshift::libs::timer;
    use opshift::libs::work_item::{ItemFilter, ItemKind, ItemStatus, WorkItem};
    use std::sync::Mutex;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Each test sandboxes HOME into its own temp dir; the lock keeps the
    // per-process environment from being swapped mid-test.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct DbTestContext {
        _guard: std::sync::MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            DbTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn create_item(name: &str, kind: ItemKind) -> i64 {
        Items::new().unwrap().insert(&WorkItem::new(name, kind)).unwrap()
    }

    #[test_context(DbTestContext)]
    #[test]
    fn second_start_for_same_scope_conflicts(_ctx: &mut DbTestContext) {
        let item_id = create_item("pump overhaul", ItemKind::Task);
        let entries = Entries::new().unwrap();

        entries.start(item_id, ItemKind::Task, 7, at(9, 0, 0)).unwrap();

        let err = entries.start(item_id, ItemKind::Task, 7, at(9, 1, 0)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TimerError>(),
            Some(TimerError::Conflict { .. })
        ));

        // A different entry kind on the same item is a different scope.
        entries.start(item_id, ItemKind::Subtask, 7, at(9, 2, 0)).unwrap();
    }

    #[test_context(DbTestContext)]
    #[test]
    fn full_lifecycle_accounts_for_pauses(_ctx: &mut DbTestContext) {
        let item_id = create_item("panel wiring", ItemKind::Task);
        let entries = Entries::new().unwrap();

        let entry_id = entries.start(item_id, ItemKind::Task, 7, FixedClock(at(9, 0, 0)).now()).unwrap();
        entries.pause(entry_id, at(9, 10, 0)).unwrap();
        entries.resume(entry_id, at(9, 15, 0)).unwrap();

        // Live elapsed at 09:17: 17 minutes wall clock minus 5 paused.
        let open = entries.get(entry_id).unwrap().unwrap();
        assert_eq!(timer::elapsed_seconds(&open, at(9, 17, 0)), 12 * 60);

        let duration = entries.stop(entry_id, Some("rewired breaker panel"), at(9, 20, 0)).unwrap();
        assert_eq!(duration, 15);

        let closed = entries.get(entry_id).unwrap().unwrap();
        assert_eq!(closed.end, Some(at(9, 20, 0)));
        assert_eq!(closed.duration, Some(15));
        assert_eq!(closed.comment.as_deref(), Some("rewired breaker panel"));

        // The log carries the full audit trail, comment excluded.
        let events = event_log::parse(&closed.event_log);
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Pause, EventKind::Resume, EventKind::Stop]);
        assert!(!closed.event_log.contains("rewired"));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn wrong_state_transitions_are_rejected(_ctx: &mut DbTestContext) {
        let item_id = create_item("filter swap", ItemKind::Quick);
        let entries = Entries::new().unwrap();
        let entry_id = entries.start(item_id, ItemKind::Quick, 7, at(9, 0, 0)).unwrap();

        // resume while running
        let err = entries.resume(entry_id, at(9, 5, 0)).unwrap_err();
        assert_eq!(err.downcast_ref::<TimerError>(), Some(&TimerError::NotPaused(entry_id)));

        entries.pause(entry_id, at(9, 10, 0)).unwrap();

        // pause while paused
        let err = entries.pause(entry_id, at(9, 11, 0)).unwrap_err();
        assert_eq!(err.downcast_ref::<TimerError>(), Some(&TimerError::NotRunning(entry_id)));

        entries.resume(entry_id, at(9, 15, 0)).unwrap();
        entries.stop(entry_id, None, at(9, 20, 0)).unwrap();

        // every mutation after close fails
        let err = entries.stop(entry_id, None, at(9, 21, 0)).unwrap_err();
        assert_eq!(err.downcast_ref::<TimerError>(), Some(&TimerError::AlreadyClosed(entry_id)));
        let err = entries.pause(entry_id, at(9, 22, 0)).unwrap_err();
        assert_eq!(err.downcast_ref::<TimerError>(), Some(&TimerError::NotRunning(entry_id)));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn status_advances_only_from_not_started(_ctx: &mut DbTestContext) {
        let item_id = create_item("site survey", ItemKind::Task);
        let mut items = Items::new().unwrap();

        assert!(items.mark_in_progress(item_id).unwrap());
        assert_eq!(items.get(item_id).unwrap().unwrap().status, ItemStatus::InProgress);

        // Second start leaves the status untouched.
        assert!(!items.mark_in_progress(item_id).unwrap());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn open_entries_listing_skips_closed_rows(_ctx: &mut DbTestContext) {
        let first = create_item("first", ItemKind::Task);
        let second = create_item("second", ItemKind::Task);
        let entries = Entries::new().unwrap();

        let closed_id = entries.start(first, ItemKind::Task, 7, at(8, 0, 0)).unwrap();
        entries.stop(closed_id, None, at(8, 30, 0)).unwrap();
        let open_id = entries.start(second, ItemKind::Task, 7, at(9, 0, 0)).unwrap();

        let open = entries.fetch_open().unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, open_id);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn items_fetch_by_ids(_ctx: &mut DbTestContext) {
        let first = create_item("alpha", ItemKind::Task);
        let _second = create_item("beta", ItemKind::Task);
        let third = create_item("gamma", ItemKind::Quick);

        let mut items = Items::new().unwrap();
        let selected = items.fetch(ItemFilter::ByIds(vec![first, third])).unwrap();
        let names: Vec<_> = selected.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
    }
}
