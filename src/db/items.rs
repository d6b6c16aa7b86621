use crate::db::db::Db;
use crate::libs::work_item::{ItemFilter, ItemKind, ItemStatus, WorkItem};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_ITEM: &str = "INSERT INTO items (kind, name, status, scheduled_date, scheduled_time, slot_start, slot_end, ad_hoc)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_ITEMS: &str = "SELECT id, kind, name, status, scheduled_date, scheduled_time, slot_start, slot_end, ad_hoc FROM items";
const WHERE_ID: &str = "WHERE id IN";
const SELECT_ITEM: &str = "SELECT id, kind, name, status, scheduled_date, scheduled_time, slot_start, slot_end, ad_hoc FROM items WHERE id = ?1";

/// Conditional status flip on first timer start. The WHERE clause keeps
/// the write race-free: a completed or already-running item is untouched.
const MARK_IN_PROGRESS: &str = "UPDATE items SET status = 'in_progress' WHERE id = ?1 AND status = 'not_started'";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Items {
    pub conn: Connection,
}

impl Items {
    pub fn new() -> Result<Items> {
        let db = Db::new()?;
        Ok(Items { conn: db.conn })
    }

    pub fn insert(&mut self, item: &WorkItem) -> Result<i64> {
        self.conn.execute(
            INSERT_ITEM,
            params![
                item.kind.as_str(),
                item.name,
                item.status.as_str(),
                item.scheduled_date.map(|d| d.format("%Y-%m-%d").to_string()),
                item.scheduled_time,
                item.slot_start.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                item.slot_end.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                item.ad_hoc,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch(&mut self, filter: ItemFilter) -> Result<Vec<WorkItem>> {
        let (mut stmt, params) = match filter {
            ItemFilter::All => (self.conn.prepare(SELECT_ITEMS)?, vec![]),
            ItemFilter::ByIds(ids) => (
                self.conn
                    .prepare(&format!("{} {} ({})", SELECT_ITEMS, WHERE_ID, vec!["?"; ids.len()].join(", ")))?,
                ids,
            ),
        };

        let item_iter = stmt.query_map(params_from_iter(params.iter()), item_from_row)?;
        let mut items = Vec::new();
        for item_result in item_iter {
            items.push(item_result?);
        }

        Ok(items)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<WorkItem>> {
        let item = self.conn.query_row(SELECT_ITEM, params![id], item_from_row).optional()?;
        Ok(item)
    }

    /// Flips the item to in-progress on first start; a no-op when the item
    /// already moved past not-started.
    pub fn mark_in_progress(&mut self, id: i64) -> Result<bool> {
        let updated = self.conn.execute(MARK_IN_PROGRESS, params![id])?;
        Ok(updated > 0)
    }
}

fn item_from_row(row: &Row) -> rusqlite::Result<WorkItem> {
    let kind_str: String = row.get(1)?;
    let status_str: String = row.get(3)?;
    Ok(WorkItem {
        id: Some(row.get(0)?),
        kind: ItemKind::from_str(&kind_str).unwrap_or(ItemKind::Task),
        name: row.get(2)?,
        status: ItemStatus::from_str(&status_str).unwrap_or(ItemStatus::NotStarted),
        scheduled_date: row
            .get::<_, Option<String>>(4)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        scheduled_time: row.get(5)?,
        slot_start: row
            .get::<_, Option<String>>(6)?
            .and_then(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).ok()),
        slot_end: row
            .get::<_, Option<String>>(7)?
            .and_then(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).ok()),
        ad_hoc: row.get(8)?,
    })
}
