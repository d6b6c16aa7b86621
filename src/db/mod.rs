//! Database layer for the opshift application.
//!
//! Built on SQLite. The schema carries the one invariant the engine cannot
//! enforce in application code alone: a partial unique index guarantees at
//! most one open time entry per `(item, entry kind)` even under concurrent
//! callers from separate processes.

/// Core database connection and initialization module.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// Work item storage: tasks, subtasks, and ad-hoc quick items.
pub mod items;

/// Time entry storage and the stateful timer operations.
pub mod entries;
