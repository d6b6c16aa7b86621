use crate::db::entries::Entries;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PauseArgs {
    /// Time entry to pause
    #[arg(required = true)]
    entry: i64,
}

pub fn cmd(args: PauseArgs) -> Result<()> {
    Entries::new()?.pause(args.entry, SystemClock.now())?;
    msg_success!(Message::TimerPaused(args.entry));
    Ok(())
}
