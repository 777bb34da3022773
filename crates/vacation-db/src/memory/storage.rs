//! Process-local StorageAdapter

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use vacation_core::{DomainResult, StorageAdapter};

/// [`StorageAdapter`] backed by a concurrent map; contents die with the process
#[derive(Debug, Default)]
pub struct MemoryStorageAdapter {
    entries: DashMap<String, Value>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorageAdapter {
    async fn get_raw(&self, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_raw(&self, key: &str, value: Value) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        self.entries.clear();
        Ok(())
    }

    async fn get_all_keys(&self) -> DomainResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}
