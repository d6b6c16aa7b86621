//! Display implementation for opshift application messages.
//!
//! Converts structured `Message` values into the human-readable text printed
//! by the message macros. All user-facing strings live here so wording stays
//! in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted(id, name) => format!("Timer started (entry {}) on '{}'", id, name),
            Message::TimerPaused(id) => format!("Timer paused (entry {})", id),
            Message::TimerResumed(id) => format!("Timer resumed (entry {})", id),
            Message::TimerStopped(id, duration) => format!("Timer stopped (entry {}), worked {}", id, duration),
            Message::TimerAlreadyRunning(item_id, kind) => {
                format!("An open entry already exists for item {} ({})", item_id, kind)
            }
            Message::TimerNotRunning(id) => format!("Entry {} is not running", id),
            Message::TimerNotPaused(id) => format!("Entry {} is not paused", id),
            Message::TimerAlreadyClosed(id) => format!("Entry {} is already closed", id),
            Message::NoOpenEntries => "No open time entries".to_string(),
            Message::OpenEntriesHeader => "Open time entries".to_string(),
            Message::PromptStopComment => "Comment for this work interval".to_string(),

            // === ITEM MESSAGES ===
            Message::ItemCreated(id, name) => format!("Item {} '{}' created", id, name),
            Message::ItemNotFound(id) => format!("Item {} not found", id),
            Message::ItemsHeader => "Work items".to_string(),
            Message::NoItemsFound => "No work items found".to_string(),

            // === BOARD MESSAGES ===
            Message::BoardHeader(date) => format!("Shift board for {}", date),
            Message::BoardSkippedItems(count) => format!("{} item(s) without a resolvable schedule were skipped", count),
            Message::BoardEmptyShift(id) => format!("Shift {}: no items", id),

            // === IDENTITY MESSAGES ===
            Message::IdentityNotConfigured => "No accounting identity configured. Run 'opshift init' first".to_string(),
            Message::IdentityConfigured(name) => format!("Accounting identity set to '{}'", name),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::PromptEmployeeId => "Employee id".to_string(),
            Message::PromptEmployeeName => "Employee name".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration {}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === ANOMALY MESSAGES ===
            Message::NegativeDurationClamped(id) => {
                format!("Entry {} produced a negative duration; clamped to zero", id)
            }
            Message::MalformedEventLine(fragment) => format!("Skipped unrecognized event log fragment: '{}'", fragment),
            Message::UnresolvableSchedule(id) => format!("Item {} has no resolvable schedule", id),

            // === GENERIC MESSAGES ===
            Message::InvalidDateFormat(input) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", input),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CUSTOM MESSAGE ===
            Message::Custom(text) => text.clone(),
        };
        write!(f, "{}", text)
    }
}
