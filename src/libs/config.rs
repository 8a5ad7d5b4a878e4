//! Application configuration.
//!
//! Settings live as JSON in the platform application data directory and
//! every value has a default, so a missing file is equivalent to an
//! empty one. The `init` command runs a small interactive wizard to
//! create or update the file.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::File;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_CLEANUP_INTERVAL_HOURS: u64 = 24;

/// Analytics cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Snapshot time-to-live in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

/// Background cleanup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Interval between cleanup passes in watch mode, in hours.
    pub interval_hours: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        CleanupConfig {
            interval_hours: DEFAULT_CLEANUP_INTERVAL_HOURS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<CleanupConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&path)?;

        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;

        Ok(())
    }

    /// Interactive configuration wizard. Current values (or defaults)
    /// are offered as answers.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        msg_print!(Message::ConfigWizardHeader, true);

        let ttl_secs: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCacheTtl.to_string())
            .default(current.cache.clone().unwrap_or_default().ttl_secs)
            .interact_text()?;

        let interval_hours: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCleanupInterval.to_string())
            .default(current.cleanup.clone().unwrap_or_default().interval_hours)
            .interact_text()?;

        Ok(Config {
            cache: Some(CacheConfig { ttl_secs }),
            cleanup: Some(CleanupConfig { interval_hours }),
        })
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache.as_ref().map(|cache| cache.ttl_secs).unwrap_or(DEFAULT_CACHE_TTL_SECS)
    }

    pub fn cleanup_interval_hours(&self) -> u64 {
        self.cleanup.as_ref().map(|cleanup| cleanup.interval_hours).unwrap_or(DEFAULT_CLEANUP_INTERVAL_HOURS)
    }
}
