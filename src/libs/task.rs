use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_DONE: &str = "done";

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

const VALID_STATUSES: [&str; 3] = [STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_DONE];
const VALID_PRIORITIES: [&str; 3] = [PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// A single task record.
///
/// `status` and `priority` are kept as plain strings so that raw input
/// (bulk import files, CLI flags) reaches [`validate_task`] untouched and
/// bad values surface as validation failures rather than parse errors.
/// An empty `status` means "not set"; the storage layer keeps it as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: &str, description: &str, priority: &str, due_date: DateTime<Utc>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            status: String::new(),
            priority: priority.to_string(),
            due_date: Some(due_date),
            created_at: None,
            updated_at: None,
        }
    }

    /// Stamps both bookkeeping timestamps with the given instant.
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }
}

/// Filtering criteria for task listing and export.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub title: Option<String>,
}

/// A partial update for a stored task. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none() && self.priority.is_none() && self.due_date.is_none()
    }
}

/// Why a task was rejected by [`validate_task`].
///
/// The message texts are part of the import result format consumed by
/// existing clients and stay unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("название задачи не может быть пустым")]
    EmptyTitle,
    #[error("приоритет задачи не может быть пустым")]
    EmptyPriority,
    #[error("не указана дата завершения задачи")]
    MissingDueDate,
    #[error("некорректный статус задачи: {0}")]
    InvalidStatus(String),
    #[error("некорректный приоритет задачи: {0}")]
    InvalidPriority(String),
}

pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

pub fn is_valid_priority(priority: &str) -> bool {
    VALID_PRIORITIES.contains(&priority)
}

/// Checks a task against the creation rule set.
///
/// The same rules guard single-task creation and every item of a bulk
/// import: title and priority must be present, the due date must be set,
/// and status/priority must be one of the known values (status may be
/// left empty).
pub fn validate_task(task: &Task) -> Result<(), ValidationError> {
    if task.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if task.priority.is_empty() {
        return Err(ValidationError::EmptyPriority);
    }
    if task.due_date.is_none() {
        return Err(ValidationError::MissingDueDate);
    }
    if !task.status.is_empty() && !is_valid_status(&task.status) {
        return Err(ValidationError::InvalidStatus(task.status.clone()));
    }
    if !is_valid_priority(&task.priority) {
        return Err(ValidationError::InvalidPriority(task.priority.clone()));
    }

    Ok(())
}
