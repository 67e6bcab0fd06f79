use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::services::LinkSettings;
use crate::config::StaticConfig;
use crate::storage::{StorageFactory, UrlStore};
use crate::utils::IdValidator;

/// 服务器启动所需的共享组件，启动时构建一次后注入到各 worker
#[derive(Clone)]
pub struct StartupContext {
    pub store: Arc<dyn UrlStore>,
    pub validator: IdValidator,
    pub link_settings: LinkSettings,
}

/// 准备服务器启动的上下文
///
/// 存储打开或建表失败时直接返回错误，进程不会开始监听。
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;

    prepare_with_store(config, store).await.inspect(|_| {
        info!(
            "Pre-startup processing completed in {} ms",
            start_time.elapsed().as_millis()
        );
    })
}

/// 使用已有的存储实例构建上下文（测试中注入 MemoryStore）
pub async fn prepare_with_store(
    config: &StaticConfig,
    store: Arc<dyn UrlStore>,
) -> Result<StartupContext> {
    store
        .init()
        .await
        .context("Failed to initialize URL storage")?;
    debug!("{} storage initialized", store.backend_name());

    let validator = IdValidator::new().context("Failed to build id validator")?;
    let link_settings = LinkSettings::new(config.server.public_base_url.clone());

    Ok(StartupContext {
        store,
        validator,
        link_settings,
    })
}
