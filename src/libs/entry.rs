use crate::libs::work_item::ItemKind;
use chrono::NaiveDateTime;

/// One tracked interval of work on an item, open or closed.
///
/// `end == None` means the timer is still running (or paused). `duration`
/// is minutes, derived once at stop time and never hand-edited. The pause
/// and resume history lives in `event_log` (see [`crate::libs::event_log`]);
/// `comment` is the operator's free-text note and is never mixed into it.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    pub id: i64,
    pub item_id: i64,
    pub entry_kind: ItemKind,
    pub employee_id: i64,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub event_log: String,
    pub duration: Option<i64>,
    pub comment: Option<String>,
}
