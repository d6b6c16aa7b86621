#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(i64, String),        // entry id, item name
    TimerPaused(i64),                 // entry id
    TimerResumed(i64),                // entry id
    TimerStopped(i64, String),        // entry id, formatted duration
    TimerAlreadyRunning(i64, String), // item id, entry kind
    TimerNotRunning(i64),             // entry id
    TimerNotPaused(i64),              // entry id
    TimerAlreadyClosed(i64),          // entry id
    NoOpenEntries,
    OpenEntriesHeader,
    PromptStopComment,

    // === ITEM MESSAGES ===
    ItemCreated(i64, String), // item id, name
    ItemNotFound(i64),
    ItemsHeader,
    NoItemsFound,

    // === BOARD MESSAGES ===
    BoardHeader(String),       // viewing date
    BoardSkippedItems(usize),  // count of unresolvable items
    BoardEmptyShift(char),     // shift id

    // === IDENTITY MESSAGES ===
    IdentityNotConfigured,
    IdentityConfigured(String), // employee name

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    PromptEmployeeId,
    PromptEmployeeName,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === ANOMALY MESSAGES ===
    NegativeDurationClamped(i64), // entry id
    MalformedEventLine(String),   // the skipped fragment
    UnresolvableSchedule(i64),    // item id

    // === GENERIC MESSAGES ===
    InvalidDateFormat(String),
    OperationCancelled,

    // === CUSTOM MESSAGE ===
    Custom(String),
}
