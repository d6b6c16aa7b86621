use crate::db::entries::Entries;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::formatter::format_minutes;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Time entry to stop
    #[arg(required = true)]
    entry: i64,

    #[arg(long, short, help = "Comment describing the work done")]
    comment: Option<String>,
}

pub fn cmd(args: StopArgs) -> Result<()> {
    let comment = match args.comment {
        Some(comment) => comment,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStopComment.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let comment = if comment.is_empty() { None } else { Some(comment.as_str()) };
    let duration = Entries::new()?.stop(args.entry, comment, SystemClock.now())?;

    msg_success!(Message::TimerStopped(args.entry, format_minutes(duration)));
    Ok(())
}
