//! Time entry store: the stateful half of the timer accounting engine.
//!
//! The single-open-entry invariant is enforced by the partial unique index
//! `idx_entries_open`, so concurrent starts from separate processes resolve
//! to exactly one winner without an application-level check. Pause and
//! resume re-read the current log inside a transaction immediately before
//! appending, which keeps racing requests from producing two consecutive
//! pause or resume events. Stop closes the entry with a single conditional
//! UPDATE: end, duration, comment, and the log-with-stop-event land
//! together or not at all.

use crate::db::db::Db;
use crate::libs::entry::TimeEntry;
use crate::libs::errors::TimerError;
use crate::libs::event_log::{self, EventKind, TIMESTAMP_FORMAT};
use crate::libs::timer;
use crate::libs::work_item::ItemKind;
use anyhow::Result;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_ENTRY: &str = "INSERT INTO entries (item_id, entry_kind, employee_id, start, event_log) VALUES (?1, ?2, ?3, ?4, '')";

const SELECT_ENTRY: &str = "SELECT id, item_id, entry_kind, employee_id, start, end, event_log, duration, comment FROM entries WHERE id = ?1";

const SELECT_OPEN_ENTRIES: &str =
    "SELECT id, item_id, entry_kind, employee_id, start, end, event_log, duration, comment FROM entries WHERE end IS NULL ORDER BY start";

const UPDATE_EVENT_LOG: &str = "UPDATE entries SET event_log = ?1 WHERE id = ?2 AND end IS NULL";

/// The close is one statement on purpose: a partial write that sets `end`
/// without `duration` would be a data-integrity defect.
const CLOSE_ENTRY: &str = "UPDATE entries SET end = ?1, duration = ?2, comment = ?3, event_log = ?4 WHERE id = ?5 AND end IS NULL";

pub struct Entries {
    pub conn: Arc<Mutex<Connection>>,
}

impl Entries {
    pub fn new() -> Result<Entries> {
        let db_conn = Db::new()?.conn;

        Ok(Entries {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Opens a new entry for `(item_id, entry_kind)`.
    ///
    /// The insert races on the open-entry unique index; a loser surfaces as
    /// [`TimerError::Conflict`] no matter which process it runs in.
    pub fn start(&self, item_id: i64, entry_kind: ItemKind, employee_id: i64, now: NaiveDateTime) -> Result<i64> {
        let conn_guard = self.conn.lock();
        let result = conn_guard.execute(
            INSERT_ENTRY,
            params![item_id, entry_kind.as_str(), employee_id, now.format(TIMESTAMP_FORMAT).to_string()],
        );

        match result {
            Ok(_) => Ok(conn_guard.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
                Err(TimerError::Conflict {
                    item_id,
                    entry_kind: entry_kind.as_str().to_string(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn get(&self, id: i64) -> Result<Option<TimeEntry>> {
        let conn_guard = self.conn.lock();
        let entry = conn_guard.query_row(SELECT_ENTRY, params![id], entry_from_row).optional()?;
        Ok(entry)
    }

    pub fn fetch_open(&self) -> Result<Vec<TimeEntry>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_OPEN_ENTRIES)?;
        let entry_iter = stmt.query_map([], entry_from_row)?;
        let mut entries = Vec::new();
        for entry_result in entry_iter {
            entries.push(entry_result?);
        }
        Ok(entries)
    }

    /// Appends a pause event. Fails with [`TimerError::NotRunning`] when
    /// the entry is closed, missing, or already paused.
    pub fn pause(&self, id: i64, now: NaiveDateTime) -> Result<()> {
        let mut conn_guard = self.conn.lock();
        let tx = conn_guard.transaction()?;

        let entry = tx.query_row(SELECT_ENTRY, params![id], entry_from_row).optional()?;
        let entry = entry.ok_or(TimerError::NotRunning(id))?;
        if entry.end.is_some() || event_log::ends_paused(&entry.event_log) {
            return Err(TimerError::NotRunning(id).into());
        }

        let log = event_log::append_event(&entry.event_log, EventKind::Pause, now);
        tx.execute(UPDATE_EVENT_LOG, params![log, id])?;
        tx.commit()?;
        Ok(())
    }

    /// Appends a resume event. Fails with [`TimerError::NotPaused`] when
    /// the entry is not currently paused.
    pub fn resume(&self, id: i64, now: NaiveDateTime) -> Result<()> {
        let mut conn_guard = self.conn.lock();
        let tx = conn_guard.transaction()?;

        let entry = tx.query_row(SELECT_ENTRY, params![id], entry_from_row).optional()?;
        let entry = entry.ok_or(TimerError::NotPaused(id))?;
        if entry.end.is_some() || !event_log::ends_paused(&entry.event_log) {
            return Err(TimerError::NotPaused(id).into());
        }

        let log = event_log::append_event(&entry.event_log, EventKind::Resume, now);
        tx.execute(UPDATE_EVENT_LOG, params![log, id])?;
        tx.commit()?;
        Ok(())
    }

    /// Closes the entry, returning the final duration in minutes.
    ///
    /// The duration uses the same paused-time arithmetic as the live
    /// elapsed query. The comment stays a separate column and is never
    /// mixed into the event log; the log gains a terminal stop event for
    /// audit purposes.
    pub fn stop(&self, id: i64, comment: Option<&str>, now: NaiveDateTime) -> Result<i64> {
        let mut conn_guard = self.conn.lock();
        let tx = conn_guard.transaction()?;

        let entry = tx.query_row(SELECT_ENTRY, params![id], entry_from_row).optional()?;
        let entry = entry.ok_or(TimerError::AlreadyClosed(id))?;
        if entry.end.is_some() {
            return Err(TimerError::AlreadyClosed(id).into());
        }

        let duration = timer::final_duration_minutes(&entry, now);
        let log = event_log::append_event(&entry.event_log, EventKind::Stop, now);

        let updated = tx.execute(
            CLOSE_ENTRY,
            params![now.format(TIMESTAMP_FORMAT).to_string(), duration, comment, log, id],
        )?;
        if updated == 0 {
            return Err(TimerError::AlreadyClosed(id).into());
        }

        tx.commit()?;
        Ok(duration)
    }
}

fn entry_from_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let kind_str: String = row.get(2)?;
    let start_str: String = row.get(4)?;
    let end_str: Option<String> = row.get(5)?;

    Ok(TimeEntry {
        id: row.get(0)?,
        item_id: row.get(1)?,
        entry_kind: ItemKind::from_str(&kind_str).unwrap_or(ItemKind::Task),
        employee_id: row.get(3)?,
        start: NaiveDateTime::parse_from_str(&start_str, TIMESTAMP_FORMAT).unwrap(),
        end: end_str.map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).unwrap()),
        event_log: row.get(6)?,
        duration: row.get(7)?,
        comment: row.get(8)?,
    })
}
