use crate::db::tasks::Tasks;
use crate::libs::analytics::AnalyticsService;
use crate::libs::cache::FileCache;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use std::sync::Arc;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = Arc::new(Tasks::new()?);
    let cache = Arc::new(FileCache::new(config.cache_ttl_secs())?);

    let service = AnalyticsService::new(store, cache);
    let snapshot = service.get_analytics().await?;

    msg_print!(Message::AnalyticsHeader, true);
    View::analytics(&snapshot);

    Ok(())
}
