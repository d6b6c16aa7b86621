//! # Opshift - Operator Shift Board and Timer Accounting
//!
//! A command-line utility for tracking work intervals on tasks, subtasks,
//! and ad-hoc quick items, and for bucketing scheduled items into four
//! fixed 6-hour daily shifts.
//!
//! ## Features
//!
//! - **Timer Accounting**: Start, pause, resume, and stop work intervals
//!   with pause-aware elapsed time and a single open interval per item
//! - **Event Log**: Append-only pause/resume/stop audit trail stored as a
//!   tolerant text column
//! - **Shift Board**: Group scheduled items into the A/B/C/D shift windows
//!   of a viewing date, with carry-over for short-lived ad-hoc items
//! - **Work Items**: Minimal create/list surface for the items the timer
//!   and the board operate on
//!
//! ## Usage
//!
//! ```rust,no_run
//! use opshift::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
