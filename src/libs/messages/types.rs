/// Every user-facing message of the CLI.
///
/// Keeping the texts behind one enum gives a single place to review
/// wording and makes the display layer trivial to localize later.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TasksNotFound,
    NoChangesDetected,
    ConfirmDeleteTask(i64),
    PromptTaskTitle,
    PromptTaskPriority,
    PromptTaskDueDate,

    // === IMPORT / EXPORT MESSAGES ===
    ImportCompleted(usize),
    ImportSkipped(usize),
    ExportCompleted(String),

    // === ANALYTICS MESSAGES ===
    AnalyticsHeader,

    // === CLEANUP MESSAGES ===
    CleanupCompleted(u64),
    CleanupWatchStarted(u64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWizardHeader,
    PromptCacheTtl,
    PromptCleanupInterval,
}
