use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Args)]
pub struct CleanupArgs {
    #[arg(long, help = "Keep running, repeating the cleanup on an interval")]
    watch: bool,
    #[arg(long, help = "Interval between passes in hours (watch mode)")]
    every: Option<u64>,
}

pub async fn cmd(args: CleanupArgs) -> Result<()> {
    let store = Tasks::new()?;

    if !args.watch {
        let deleted = store.delete_expired()?;
        msg_success!(Message::CleanupCompleted(deleted));
        return Ok(());
    }

    let hours = match args.every {
        Some(hours) => hours,
        None => Config::read()?.cleanup_interval_hours(),
    }
    .max(1);
    msg_info!(Message::CleanupWatchStarted(hours));

    let mut ticker = tokio::time::interval(Duration::from_secs(hours * 3600));
    // the first tick fires immediately, skip it
    ticker.tick().await;
    loop {
        ticker.tick().await;
        match store.delete_expired() {
            Ok(deleted) => info!(deleted, "expired tasks removed"),
            Err(err) => error!(error = %err, "failed to remove expired tasks"),
        }
    }
}
