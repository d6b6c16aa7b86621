//! Core library modules for the opshift application.
//!
//! Serves as the main entry point for all opshift library components.
//!
//! ## Features
//!
//! - **Timer Accounting**: Event log codec, pause-aware interval math,
//!   entry state machine
//! - **Shift Planning**: Shift window calculator, scheduled-time resolver,
//!   workload bucketer
//! - **Core Infrastructure**: Configuration, data storage, messaging,
//!   identity resolution, clock injection
//! - **User Interface**: Console rendering and duration formatting

pub mod bucket;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod errors;
pub mod event_log;
pub mod formatter;
pub mod identity;
pub mod messages;
pub mod schedule;
pub mod shift;
pub mod timer;
pub mod view;
pub mod work_item;
