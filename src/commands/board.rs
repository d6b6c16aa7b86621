//! Shift board command.
//!
//! Buckets every work item into the four shift windows of the viewing date
//! and renders them as a table. Items whose schedule cannot be resolved are
//! counted and reported, never treated as an error.

use crate::db::items::Items;
use crate::libs::bucket::{self, AdHocCarryOver};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::work_item::ItemFilter;
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Date to show the board for
    #[arg(long, short, default_value = "today", help = "Viewing date (YYYY-MM-DD or 'today')")]
    date: String,
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    let viewing_date = parse_date(&args.date)?;
    let config = Config::read()?;
    let lookahead = Duration::hours(config.carry_over_lookahead_hours());

    let items = Items::new()?.fetch(ItemFilter::All)?;
    let board = bucket::bucket(&items, viewing_date, SystemClock.now(), &AdHocCarryOver, lookahead);

    msg_print!(Message::BoardHeader(viewing_date.format("%Y-%m-%d").to_string()), true);
    View::board(&board).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    if !board.skipped.is_empty() {
        msg_warning!(Message::BoardSkippedItems(board.skipped.len()));
    }
    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    if input == "today" {
        return Ok(Local::now().date_naive());
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat(input.to_string())),
    }
}
