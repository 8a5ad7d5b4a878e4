use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksNotFound => "Tasks not found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}?", id),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskPriority => "Priority (low, medium, high)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),

            // === IMPORT / EXPORT MESSAGES ===
            Message::ImportCompleted(count) => format!("Imported {} tasks", count),
            Message::ImportSkipped(count) => format!("{} tasks were rejected", count),
            Message::ExportCompleted(path) => format!("Exported tasks to {}", path),

            // === ANALYTICS MESSAGES ===
            Message::AnalyticsHeader => "Task analytics".to_string(),

            // === CLEANUP MESSAGES ===
            Message::CleanupCompleted(count) => format!("Removed {} expired tasks", count),
            Message::CleanupWatchStarted(hours) => format!("Cleanup watch started, running every {} h", hours),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWizardHeader => "Tasker configuration".to_string(),
            Message::PromptCacheTtl => "Analytics cache TTL (seconds)".to_string(),
            Message::PromptCleanupInterval => "Cleanup interval (hours)".to_string(),
        };

        write!(f, "{}", text)
    }
}
