//! Create and list work items.
//!
//! The item surface is deliberately minimal: the timer and the shift board
//! operate on items, they do not manage them. Scheduling fields accept the
//! same loose shapes the resolver understands, so whatever an upstream
//! system would store can be reproduced from the command line.

use crate::db::items::Items;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::work_item::{ItemFilter, ItemKind, WorkItem};
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ItemArgs {
    #[command(subcommand)]
    action: ItemAction,
}

#[derive(Debug, Subcommand)]
enum ItemAction {
    #[command(about = "Create a work item")]
    Add(AddArgs),
    #[command(about = "List work items")]
    List,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(required = true)]
    name: String,

    #[arg(long, short, default_value = "task", help = "Item kind: task, subtask or quick")]
    kind: String,

    #[arg(long, help = "Scheduled calendar date (YYYY-MM-DD)")]
    date: Option<String>,

    #[arg(long, help = "Scheduled time of day (HH:MM) or a full timestamp")]
    time: Option<String>,

    #[arg(long, help = "Reserved slot start (YYYY-MM-DD HH:MM:SS)")]
    slot_start: Option<String>,

    #[arg(long, help = "Reserved slot end (YYYY-MM-DD HH:MM:SS)")]
    slot_end: Option<String>,

    #[arg(long, help = "Mark the item (or its parent) as ad-hoc/misc project")]
    ad_hoc: bool,
}

pub fn cmd(args: ItemArgs) -> Result<()> {
    match args.action {
        ItemAction::Add(add) => add_item(add),
        ItemAction::List => list_items(),
    }
}

fn add_item(args: AddArgs) -> Result<()> {
    let Some(kind) = ItemKind::from_str(&args.kind) else {
        msg_bail_anyhow!(Message::Custom(format!("Unknown item kind '{}'", args.kind)));
    };

    let mut item = WorkItem::new(&args.name, kind);
    // Quick items are ad-hoc by definition.
    item.ad_hoc = args.ad_hoc || kind == ItemKind::Quick;

    if let Some(date) = args.date {
        match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
            Ok(parsed) => item.scheduled_date = Some(parsed),
            Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat(date)),
        }
    }
    // Stored verbatim; the schedule resolver decides what it means.
    item.scheduled_time = args.time;
    item.slot_start = args.slot_start.as_deref().map(parse_slot).transpose()?;
    item.slot_end = args.slot_end.as_deref().map(parse_slot).transpose()?;

    let id = Items::new()?.insert(&item)?;
    msg_success!(Message::ItemCreated(id, item.name));
    Ok(())
}

fn list_items() -> Result<()> {
    let items = Items::new()?.fetch(ItemFilter::All)?;
    if items.is_empty() {
        msg_print!(Message::NoItemsFound);
        return Ok(());
    }
    msg_print!(Message::ItemsHeader, true);
    View::items(&items).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}

fn parse_slot(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M"))
        .map_err(|_| anyhow::anyhow!("❌ Invalid slot timestamp '{}', expected YYYY-MM-DD HH:MM[:SS]", text))
}
