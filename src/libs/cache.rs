//! File-backed analytics cache with a time-to-live.
//!
//! The snapshot is kept as a JSON envelope carrying its write instant;
//! expiry is evaluated on read. An absent or expired file is a miss, a
//! file that cannot be read or deserialized is an error — the aggregator
//! decides what to do with it (it logs and recomputes).

use crate::libs::analytics::{AnalyticsCache, AnalyticsSnapshot};
use crate::libs::data_storage::DataStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CACHE_FILE_NAME: &str = "analytics_cache.json";

#[derive(Serialize, Deserialize)]
struct CacheEnvelope {
    cached_at: DateTime<Utc>,
    snapshot: AnalyticsSnapshot,
}

pub struct FileCache {
    path: PathBuf,
    ttl: Duration,
}

impl FileCache {
    /// Opens the cache at its default location in the application data
    /// directory.
    pub fn new(ttl_secs: u64) -> Result<Self> {
        let path = DataStorage::new().get_path(CACHE_FILE_NAME)?;
        Ok(Self::at_path(path, ttl_secs))
    }

    pub fn at_path(path: PathBuf, ttl_secs: u64) -> Self {
        FileCache {
            path,
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }
}

#[async_trait]
impl AnalyticsCache for FileCache {
    async fn fetch(&self) -> Result<Option<AnalyticsSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).context("failed to read analytics cache file")?;
        let envelope: CacheEnvelope = serde_json::from_str(&raw).context("failed to deserialize analytics cache")?;

        if Utc::now() - envelope.cached_at >= self.ttl {
            return Ok(None);
        }

        Ok(Some(envelope.snapshot))
    }

    async fn store(&self, snapshot: &AnalyticsSnapshot) -> Result<()> {
        let envelope = CacheEnvelope {
            cached_at: Utc::now(),
            snapshot: snapshot.clone(),
        };
        let raw = serde_json::to_string(&envelope).context("failed to serialize analytics snapshot")?;
        fs::write(&self.path, raw).context("failed to write analytics cache file")?;

        Ok(())
    }
}
