//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod mutations;
mod query;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::debug;

use super::UrlStore;
use crate::errors::{CrclinkError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use mutations::is_unique_violation;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url.ends_with(".sqlite3")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(CrclinkError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
///
/// `DatabaseConnection` is a pool handle; clones share the same pool.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str, pool_size: u32) -> Result<Self> {
        if database_url.is_empty() {
            return Err(CrclinkError::database_config("database_url is not set"));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, pool_size).await?
        } else {
            connect_generic(database_url, backend_name, pool_size).await?
        };

        debug!("{} storage connected", backend_name.to_uppercase());
        Ok(SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        })
    }
}

#[async_trait]
impl UrlStore for SeaOrmStorage {
    async fn init(&self) -> Result<()> {
        run_migrations(&self.db).await
    }

    async fn get(&self, id: &str) -> Result<String> {
        self.find_url(id).await
    }

    async fn set(&self, id: &str, url: &str) -> Result<()> {
        self.insert_url(id, url).await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
