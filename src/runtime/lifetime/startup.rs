use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{Analyzer, LinkService, RedirectService};
use crate::storage::{LinkStore, StorageFactory};

/// Everything a command or the server needs, wired once per process
pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    pub store: Arc<LinkStore>,
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub analyzer: Analyzer,
}

impl StartupContext {
    /// 用现成的 store 组装上下文（测试里常用 memory slot）
    pub fn with_store(config: Arc<StaticConfig>, store: Arc<LinkStore>, analyzer: Analyzer) -> Self {
        let link_service = Arc::new(LinkService::new(
            store.clone(),
            config.features.reject_duplicate_alias,
        ));
        let redirect_service = Arc::new(RedirectService::new(store.clone()));

        Self {
            config,
            store,
            link_service,
            redirect_service,
            analyzer,
        }
    }
}

/// 准备启动上下文：存储后端 + 服务 + 分析器
pub fn prepare_startup(config: Arc<StaticConfig>) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store = StorageFactory::create(&config.storage)
        .context("Failed to create storage backend")?;
    info!("{} links in store", store.len());

    let analyzer = Analyzer::from_config(&config.analysis);
    let ctx = StartupContext::with_store(config, store, analyzer);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(ctx)
}
