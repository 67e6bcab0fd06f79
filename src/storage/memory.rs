//! In-memory `UrlStore`, used by tests and for throwaway instances.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::UrlStore;
use crate::errors::{CrclinkError, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    urls: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<String> {
        self.urls
            .get(id)
            .map(|url| url.value().clone())
            .ok_or_else(|| CrclinkError::not_found(format!("can't find URL: {}", id)))
    }

    async fn set(&self, id: &str, url: &str) -> Result<()> {
        // entry 持有分片写锁，检查与插入是原子的
        match self.urls.entry(id.to_string()) {
            Entry::Occupied(_) => Err(CrclinkError::unique_violation(format!(
                "can't insert URL: already exists: {}",
                id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                Ok(())
            }
        }
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
