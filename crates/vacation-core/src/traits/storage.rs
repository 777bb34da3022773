//! Key/value storage port used to persist client-side session state

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Persistent key/value store holding JSON values
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Read a raw value; `None` when the key is absent
    async fn get_raw(&self, key: &str) -> DomainResult<Option<Value>>;

    /// Write a raw value, replacing any previous one
    async fn set_raw(&self, key: &str, value: Value) -> DomainResult<()>;

    /// Delete a key; absent keys are ignored
    async fn remove(&self, key: &str) -> DomainResult<()>;

    /// Delete every key
    async fn clear(&self) -> DomainResult<()>;

    /// List stored keys
    async fn get_all_keys(&self) -> DomainResult<Vec<String>>;
}

/// Read and deserialize a typed value
pub async fn get_json<T, S>(storage: &S, key: &str) -> DomainResult<Option<T>>
where
    T: DeserializeOwned,
    S: StorageAdapter + ?Sized,
{
    match storage.get_raw(key).await? {
        Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
            DomainError::infrastructure(format!("Corrupt value for key '{key}'"), e).share()
        }),
        None => Ok(None),
    }
}

/// Serialize and write a typed value
pub async fn set_json<T, S>(storage: &S, key: &str, value: &T) -> DomainResult<()>
where
    T: Serialize + Sync + ?Sized,
    S: StorageAdapter + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|e| {
        DomainError::infrastructure(format!("Cannot serialize value for key '{key}'"), e).share()
    })?;
    storage.set_raw(key, value).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStorage(Mutex<HashMap<String, Value>>);

    #[async_trait]
    impl StorageAdapter for MapStorage {
        async fn get_raw(&self, key: &str) -> DomainResult<Option<Value>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: Value) -> DomainResult<()> {
            self.0.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        async fn remove(&self, key: &str) -> DomainResult<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }

        async fn clear(&self) -> DomainResult<()> {
            self.0.lock().unwrap().clear();
            Ok(())
        }

        async fn get_all_keys(&self) -> DomainResult<Vec<String>> {
            Ok(self.0.lock().unwrap().keys().cloned().collect())
        }
    }

    #[tokio::test]
    async fn test_typed_values() {
        let storage = MapStorage::default();
        set_json(&storage, "token", "abc").await.unwrap();

        let token: Option<String> = get_json(&storage, "token").await.unwrap();
        assert_eq!(token.as_deref(), Some("abc"));

        let missing: Option<String> = get_json(&storage, "missing").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_value_is_infrastructure_failure() {
        let storage = MapStorage::default();
        storage
            .set_raw("count", Value::String("not a number".into()))
            .await
            .unwrap();

        let err = get_json::<u32, _>(&storage, "count").await.unwrap_err();
        assert!(err.is_infrastructure());
        assert!(err.to_string().contains("count"));
    }
}
