use crate::db::entries::Entries;
use crate::db::items::Items;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::identity::{ConfigIdentity, IdentityResolver};
use crate::libs::messages::Message;
use crate::libs::work_item::ItemKind;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Work item to start a timer on
    #[arg(required = true)]
    item: i64,

    #[arg(long, short, default_value = "task", help = "Entry kind: task, subtask or quick")]
    kind: String,
}

/// Starts a timer on an item.
///
/// The accounting identity is resolved before anything is written; the open
/// entry is inserted against the store-level uniqueness guarantee; and the
/// item's status advances to in-progress unless it already moved on.
pub fn cmd(args: StartArgs) -> Result<()> {
    let Some(kind) = ItemKind::from_str(&args.kind) else {
        msg_bail_anyhow!(Message::Custom(format!("Unknown entry kind '{}'", args.kind)));
    };

    let identity = ConfigIdentity.resolve()?;

    let mut items = Items::new()?;
    let Some(item) = items.get(args.item)? else {
        msg_bail_anyhow!(Message::ItemNotFound(args.item));
    };

    let now = SystemClock.now();
    let entry_id = Entries::new()?.start(args.item, kind, identity.employee_id, now)?;
    items.mark_in_progress(args.item)?;

    msg_success!(Message::TimerStarted(entry_id, item.name));
    Ok(())
}
