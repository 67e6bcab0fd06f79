//! URL storage
//!
//! `UrlStore` is the capability the HTTP layer depends on. Records are
//! insert-only: there is no update or delete.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod memory;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStore;

#[async_trait]
pub trait UrlStore: Send + Sync {
    /// 确保表存在，可重复调用
    async fn init(&self) -> Result<()>;

    /// 不存在时返回 `NotFound`，其他失败返回 `DatabaseOperation`
    async fn get(&self, id: &str) -> Result<String>;

    /// 插入新记录；id 已存在时返回 `UniqueViolation`，不覆盖原值
    async fn set(&self, id: &str, url: &str) -> Result<()>;

    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    /// 按 database_url 推断后端并建立连接（不执行 init）
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn UrlStore>> {
        let backend_type = backend::infer_backend_from_url(&config.database_url)?;
        let storage =
            SeaOrmStorage::new(&config.database_url, &backend_type, config.pool_size).await?;
        info!("Using storage backend: {}", storage.backend_name());
        Ok(Arc::new(storage))
    }
}
