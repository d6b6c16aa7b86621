use crate::db::entries::Entries;
use crate::db::items::Items;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::libs::timer;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Shows every open time entry with its pause-aware elapsed time.
pub fn cmd() -> Result<()> {
    let entries = Entries::new()?.fetch_open()?;
    if entries.is_empty() {
        msg_print!(Message::NoOpenEntries);
        return Ok(());
    }

    let now = SystemClock.now();
    let mut items = Items::new()?;
    let mut rows = Vec::new();
    for entry in entries {
        let item_name = items
            .get(entry.item_id)?
            .map(|item| item.name)
            .unwrap_or_else(|| format!("item {}", entry.item_id));
        let elapsed = timer::elapsed_seconds(&entry, now);
        rows.push((entry, item_name, elapsed));
    }

    msg_print!(Message::OpenEntriesHeader, true);
    View::open_entries(&rows).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}
