//! Bulk task import with concurrent validation.
//!
//! [`TaskImporter`] fans every input task out to its own validation
//! worker, joins the results, and inserts the valid subset with a single
//! atomic store call. Failures are collected per item and reported in
//! input order; they never abort the batch. Dropping the returned future
//! aborts any workers still in flight.

use crate::libs::task::{validate_task, Task, ValidationError};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};

/// Write side of the task store consumed by the importer.
#[async_trait]
pub trait ImportStore: Send + Sync {
    /// Inserts the batch atomically and returns the inserted count.
    /// Either every task is stored or none is.
    async fn import_tasks(&self, tasks: &[Task]) -> Result<usize>;
}

/// Outcome of a successful import call. `failures` lists the rejected
/// items as `"Task <n>: <reason>"`, 1-indexed against the input order; a
/// non-empty list alongside a non-zero `inserted` is a partial success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub inserted: usize,
    pub failures: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Every input task failed validation; the store was not touched.
    #[error("все задачи невалидны")]
    AllInvalid { failures: Vec<String> },

    /// A validation worker was cancelled or panicked.
    #[error("не удалось выполнить проверку задач")]
    Worker(#[source] JoinError),

    /// The batched insert failed and rolled back; the validation
    /// failures collected so far are preserved.
    #[error("не удалось импортировать задачи")]
    Store {
        failures: Vec<String>,
        #[source]
        source: anyhow::Error,
    },
}

impl ImportError {
    /// Validation failures gathered before the error occurred.
    pub fn failures(&self) -> &[String] {
        match self {
            ImportError::AllInvalid { failures } | ImportError::Store { failures, .. } => failures,
            ImportError::Worker(_) => &[],
        }
    }
}

pub struct TaskImporter {
    store: Arc<dyn ImportStore>,
}

impl TaskImporter {
    pub fn new(store: Arc<dyn ImportStore>) -> Self {
        TaskImporter { store }
    }

    /// Validates the given tasks concurrently and stores the valid ones.
    ///
    /// One worker is spawned per input item; each carries the item's
    /// input position so failure messages stay ordered no matter when
    /// workers finish. Valid tasks are stamped with fresh timestamps
    /// after the join, then inserted with one atomic store call.
    pub async fn import(&self, tasks: Vec<Task>) -> Result<ImportReport, ImportError> {
        let mut workers = JoinSet::new();
        for (index, task) in tasks.into_iter().enumerate() {
            workers.spawn(async move {
                let verdict = validate_task(&task);
                (index, task, verdict)
            });
        }

        // Fan-in: the loop is the join barrier, no result is processed
        // until every worker has reported.
        let mut results: Vec<(usize, Task, Result<(), ValidationError>)> = Vec::with_capacity(workers.len());
        while let Some(joined) = workers.join_next().await {
            results.push(joined.map_err(ImportError::Worker)?);
        }
        results.sort_by_key(|(index, ..)| *index);

        let now = Utc::now();
        let mut valid = Vec::new();
        let mut failures = Vec::new();
        for (index, mut task, verdict) in results {
            match verdict {
                Ok(()) => {
                    task.stamp(now);
                    valid.push(task);
                }
                Err(err) => failures.push(format!("Task {}: {}", index + 1, err)),
            }
        }

        if valid.is_empty() {
            return Err(ImportError::AllInvalid { failures });
        }

        match self.store.import_tasks(&valid).await {
            Ok(inserted) => Ok(ImportReport { inserted, failures }),
            Err(source) => Err(ImportError::Store { failures, source }),
        }
    }
}
