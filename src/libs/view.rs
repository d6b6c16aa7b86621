use crate::libs::bucket::ShiftBoard;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::format_elapsed;
use crate::libs::timer::{state_of, TimerState};
use crate::libs::work_item::WorkItem;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn items(items: &Vec<WorkItem>) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "NAME", "STATUS", "SCHEDULED", "AD-HOC"]);
        for item in items {
            table.add_row(row![
                item.id.unwrap_or(0),
                item.kind.as_str(),
                item.name,
                item.status.as_str(),
                schedule_column(item),
                if item.ad_hoc { "yes" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Open entries with live elapsed figures, one row per running timer.
    pub fn open_entries(rows: &Vec<(TimeEntry, String, i64)>) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ENTRY", "ITEM", "KIND", "STARTED", "STATE", "ELAPSED"]);
        for (entry, item_name, elapsed_seconds) in rows {
            let state = match state_of(entry) {
                TimerState::Paused => "paused",
                TimerState::Running => "running",
                TimerState::Closed => "closed",
            };
            table.add_row(row![
                entry.id,
                item_name,
                entry.entry_kind.as_str(),
                entry.start.format("%H:%M:%S"),
                state,
                format_elapsed(*elapsed_seconds)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn board(board: &ShiftBoard) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["SHIFT", "WINDOW", "ITEMS"]);
        for shift in &board.shifts {
            let window = format!("{} - {}", shift.start.format("%H:%M"), shift.end.format("%H:%M"));
            let items = board
                .buckets
                .get(&shift.id)
                .map(|bucketed| {
                    bucketed
                        .iter()
                        .map(|b| {
                            if b.carried_over {
                                format!("{} ({}) [carry-over]", b.item.name, b.item.kind.as_str())
                            } else {
                                format!("{} ({})", b.item.name, b.item.kind.as_str())
                            }
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![shift.id.label(), window, items]);
        }
        table.printstd();

        Ok(())
    }
}

fn schedule_column(item: &WorkItem) -> String {
    if let Some(slot_start) = item.slot_start {
        return match item.slot_end {
            Some(slot_end) => format!("{} - {}", slot_start.format("%m-%d %H:%M"), slot_end.format("%H:%M")),
            None => slot_start.format("%m-%d %H:%M").to_string(),
        };
    }
    match (&item.scheduled_date, &item.scheduled_time) {
        (Some(date), Some(time)) => format!("{} {}", date.format("%m-%d"), time),
        (None, Some(time)) => time.clone(),
        (Some(date), None) => date.format("%m-%d").to_string(),
        (None, None) => "-".to_string(),
    }
}
