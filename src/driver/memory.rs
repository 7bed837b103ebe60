//! In-Memory Driver Module
//!
//! In-process byte store with a single global life window and a periodic
//! sweep, wrapped as a cache backend. Has no concept of per-key TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::MemoryConfig;
use crate::driver::Driver;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == Stored Entry ==
/// A value plus the instant it was written.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: Vec<u8>,
    stored_at: Instant,
}

// == Memory Store ==
/// Backing store for [`MemoryDriver`].
///
/// Every entry is bounded by the same life window; an entry older than the
/// window is reported absent even before the sweep physically removes it.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, StoredEntry>,
    life_window: Duration,
}

impl MemoryStore {
    fn new(life_window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            life_window,
        }
    }

    fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(
            key,
            StoredEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() >= self.life_window {
            return None;
        }
        Some(entry.value.clone())
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes all entries older than the life window.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn sweep(&mut self) -> usize {
        let life_window = self.life_window;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < life_window);
        before - self.entries.len()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// == Memory Driver ==
/// In-process backend driver.
///
/// Construction validates the supplied [`MemoryConfig`] and starts the
/// background sweep; dropping the driver aborts the sweep task.
#[derive(Debug)]
pub struct MemoryDriver {
    store: Arc<RwLock<MemoryStore>>,
    sweeper: JoinHandle<()>,
}

impl MemoryDriver {
    /// Creates a driver from a validated configuration.
    ///
    /// Must be called within a Tokio runtime: the sweep task is spawned
    /// here.
    pub fn new(config: MemoryConfig) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(RwLock::new(MemoryStore::new(config.life_window)));
        let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval);

        Ok(Self { store, sweeper })
    }
}

impl Drop for MemoryDriver {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    fn supports_native_ttl(&self) -> bool {
        false
    }

    async fn put(&self, key: &str, value: Vec<u8>, _ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let store = self.store.read().await;
        store.get(key).ok_or(CacheError::NotExists)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        if store.remove(key) {
            Ok(())
        } else {
            Err(CacheError::NotExists)
        }
    }

    async fn contains(&self, key: &str) -> bool {
        let store = self.store.read().await;
        store.contains(key)
    }
}
