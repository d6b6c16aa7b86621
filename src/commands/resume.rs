use crate::db::entries::Entries;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Time entry to resume
    #[arg(required = true)]
    entry: i64,
}

pub fn cmd(args: ResumeArgs) -> Result<()> {
    Entries::new()?.resume(args.entry, SystemClock.now())?;
    msg_success!(Message::TimerResumed(args.entry));
    Ok(())
}
