//! CacheStore - tiny JSON-file key/value cache
//!
//! Persists small opaque values (auth tokens, selected ids) between runs in a
//! single `db.json` file. Values are stored as JSON and deserialized on the
//! way out, so any serde-compatible type works.
//!
//! # Example
//!
//! ```ignore
//! use cachestore::CacheStore;
//!
//! let store = CacheStore::open("~/.local/share/donekeeper/db.json")?;
//! let token: String = store
//!     .fetch_or_cache("auth-token", || async { prompt_for_token() })
//!     .await?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Key/value cache backed by a single JSON file
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Open a store at the given file path, creating parent directories
    ///
    /// The file itself is created lazily on first write. A missing file reads
    /// as an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create cache directory")?;
        }
        debug!(?path, "Opened cache store");
        Ok(Self { path })
    }

    /// Read a value by key, `None` when absent
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let map = self.read_map()?;
        match map.get(key) {
            Some(value) => {
                let typed = serde_json::from_value(value.clone())
                    .context(format!("Cached value for '{}' has unexpected shape", key))?;
                Ok(Some(typed))
            }
            None => Ok(None),
        }
    }

    /// Write a value under a key, replacing any previous value
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_map(&map)
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.read_map()?;
        let removed = map.remove(key).is_some();
        if removed {
            self.write_map(&map)?;
        }
        Ok(removed)
    }

    /// Return the cached value for `key`, or obtain, cache and return it
    ///
    /// `obtain` runs only on a cache miss; its result is persisted before
    /// being returned.
    pub async fn fetch_or_cache<T, F, Fut>(&self, key: &str, obtain: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(existing) = self.get(key)? {
            debug!(key, "fetch_or_cache: hit");
            return Ok(existing);
        }
        debug!(key, "fetch_or_cache: miss, obtaining");
        let value = obtain().await?;
        self.set(key, &value)?;
        Ok(value)
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).context("Failed to read cache file")?;
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                // A mangled cache is not worth failing a run over
                warn!(path = ?self.path, "Cache file is not a JSON object, starting empty");
                Ok(Map::new())
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        let content = serde_json::to_string_pretty(&Value::Object(map.clone()))?;
        fs::write(&self.path, content).context("Failed to write cache file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> CacheStore {
        CacheStore::open(temp.path().join("db.json")).unwrap()
    }

    #[test]
    fn test_get_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let value: Option<String> = store.get("nope").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.set("token", &"abc123".to_string()).unwrap();
        let value: Option<String> = store.get("token").unwrap();
        assert_eq!(value, Some("abc123".to_string()));
    }

    #[test]
    fn test_set_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("db.json");

        let store = CacheStore::open(&path).unwrap();
        store.set("board", &"b1".to_string()).unwrap();
        drop(store);

        let reopened = CacheStore::open(&path).unwrap();
        let value: Option<String> = reopened.get("board").unwrap();
        assert_eq!(value, Some("b1".to_string()));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.set("key", &1u32).unwrap();
        assert!(store.remove("key").unwrap());
        assert!(!store.remove("key").unwrap());
        let value: Option<u32> = store.get("key").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("db.json");
        fs::write(&path, "not json {{{").unwrap();

        let store = CacheStore::open(&path).unwrap();
        let value: Option<String> = store.get("anything").unwrap();
        assert_eq!(value, None);

        // Writing afterwards repairs the file
        store.set("fresh", &"ok".to_string()).unwrap();
        let value: Option<String> = store.get("fresh").unwrap();
        assert_eq!(value, Some("ok".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_or_cache_obtains_once() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let first: String = store
            .fetch_or_cache("token", || async { Ok("fresh".to_string()) })
            .await
            .unwrap();
        assert_eq!(first, "fresh");

        // Second call must come from the cache, not the closure
        let second: String = store
            .fetch_or_cache("token", || async { panic!("should not be called") })
            .await
            .unwrap();
        assert_eq!(second, "fresh");
    }

    #[tokio::test]
    async fn test_fetch_or_cache_propagates_obtain_failure() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result: Result<String> = store
            .fetch_or_cache("token", || async { Err(eyre::eyre!("no input")) })
            .await;
        assert!(result.is_err());

        // Nothing was cached
        let value: Option<String> = store.get("token").unwrap();
        assert_eq!(value, None);
    }
}
