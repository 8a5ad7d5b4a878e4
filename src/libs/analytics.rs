//! Analytics aggregation with a cache-aside snapshot.
//!
//! [`AnalyticsService`] assembles one composite report from three
//! independent store queries and keeps a single cached copy of it. The
//! cache is consulted first and repopulated on a miss; it is strictly
//! best-effort. A failing cache read is logged and treated as a miss, a
//! failing cache write is logged and swallowed — only store queries and
//! time formatting can fail the call.

use crate::libs::formatter::format_execution_time;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Trailing window, in days, of the completed/overdue report. Matches
/// the retention horizon used by the cleanup job.
pub const REPORT_PERIOD_DAYS: i64 = 7;

/// Completed and overdue task counts over the trailing report window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub completed_tasks: i64,
    pub overdue_tasks: i64,
}

/// The composite analytics result: status counts, the formatted average
/// execution time and the trailing-period report. This is the unit of
/// caching; it has no persistence beyond the cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub status_counts: HashMap<String, i64>,
    pub average_execution_time: String,
    pub report_last_period: ReportPeriod,
}

/// Read side of the task store consumed by the aggregator.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Number of tasks per status value.
    async fn task_count_by_status(&self) -> Result<HashMap<String, i64>>;

    /// Average execution time of completed tasks as a compact unit
    /// string, e.g. `"2h30m0s"`.
    async fn average_execution_time(&self) -> Result<String>;

    /// Completed/overdue counts for the trailing report window.
    async fn report_period(&self) -> Result<ReportPeriod>;
}

/// Cached snapshot storage with a TTL applied by the implementation.
#[async_trait]
pub trait AnalyticsCache: Send + Sync {
    /// Returns the cached snapshot, or `None` on a miss (absent or
    /// expired entry).
    async fn fetch(&self) -> Result<Option<AnalyticsSnapshot>>;

    /// Replaces the cached snapshot.
    async fn store(&self, snapshot: &AnalyticsSnapshot) -> Result<()>;
}

pub struct AnalyticsService {
    store: Arc<dyn AnalyticsStore>,
    cache: Arc<dyn AnalyticsCache>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn AnalyticsStore>, cache: Arc<dyn AnalyticsCache>) -> Self {
        AnalyticsService { store, cache }
    }

    /// Returns the analytics snapshot, from cache when possible.
    ///
    /// On a cache miss the three store queries run and the assembled
    /// snapshot is written back to the cache before being returned. Any
    /// store query failure aborts the call; no partial snapshot is
    /// produced.
    pub async fn get_analytics(&self) -> Result<AnalyticsSnapshot> {
        match self.cache.fetch().await {
            Ok(Some(snapshot)) => return Ok(snapshot),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "analytics cache read failed, recomputing"),
        }

        let status_counts = self.store.task_count_by_status().await.context("failed to count tasks by status")?;
        let raw_average = self.store.average_execution_time().await.context("failed to query average execution time")?;
        let report = self.store.report_period().await.context("failed to query the report for the last period")?;

        let average_execution_time = format_execution_time(&raw_average)?;

        let snapshot = AnalyticsSnapshot {
            status_counts,
            average_execution_time,
            report_last_period: report,
        };

        if let Err(err) = self.cache.store(&snapshot).await {
            warn!(error = %err, "failed to write analytics snapshot to cache");
        }

        Ok(snapshot)
    }
}
