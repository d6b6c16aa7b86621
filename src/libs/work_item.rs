use chrono::{NaiveDate, NaiveDateTime};

/// Which persisted collection a work item belongs to. The same value tags
/// the time entries recorded against the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Task,
    Subtask,
    Quick,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Task => "task",
            ItemKind::Subtask => "subtask",
            ItemKind::Quick => "quick",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "task" => Some(ItemKind::Task),
            "subtask" => Some(ItemKind::Subtask),
            "quick" => Some(ItemKind::Quick),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "not_started",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Completed => "completed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "not_started" => Some(ItemStatus::NotStarted),
            "in_progress" => Some(ItemStatus::InProgress),
            "completed" => Some(ItemStatus::Completed),
            _ => None,
        }
    }
}

/// A task, subtask, or ad-hoc quick item that can be timed and scheduled.
///
/// Scheduling fields are deliberately loose: `scheduled_time` holds either
/// an "HH:MM" time-of-day or a full timestamp string (both occur upstream),
/// and `slot_start`/`slot_end` describe a reserved multi-hour range. The
/// schedule resolver normalizes whichever combination is present.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub id: Option<i64>,
    pub kind: ItemKind,
    pub name: String,
    pub status: ItemStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<String>,
    pub slot_start: Option<NaiveDateTime>,
    pub slot_end: Option<NaiveDateTime>,
    /// The item (or its parent) belongs to the ad-hoc/misc project.
    /// Sub-items inherit the flag from their parent at creation time.
    pub ad_hoc: bool,
}

impl WorkItem {
    pub fn new(name: &str, kind: ItemKind) -> Self {
        WorkItem {
            id: None,
            kind,
            name: name.to_string(),
            status: ItemStatus::NotStarted,
            scheduled_date: None,
            scheduled_time: None,
            slot_start: None,
            slot_end: None,
            ad_hoc: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ItemFilter {
    All,
    ByIds(Vec<i64>),
}
