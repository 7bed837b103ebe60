//! Compressed Cache Layer
//!
//! Wraps exactly one backend driver, compresses every payload through the
//! codec, and emulates per-key TTL with expiry markers when the driver has
//! no native support.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::cache::{marker_key, Cache};
use crate::codec;
use crate::config::MemoryConfig;
use crate::driver::{Driver, MemoryDriver, RedisDriver};
use crate::error::{CacheError, Result};
use crate::options::{SetOption, SetOptions};

/// Delay before a masked entry is physically removed, so concurrent reads
/// that mask the same key fold into one removal without extra locking.
const MASKED_CLEANUP_DELAY: Duration = Duration::from_millis(100);

// == Compressed Cache ==
/// Cache layer over a single backend driver.
///
/// Values are zstd-compressed before they reach the driver and decompressed
/// on the way back out. For drivers without native per-key TTL, a requested
/// expiry is stored as an RFC 3339 timestamp under `<key>/expire`; a read
/// past that deadline reports `NotExists` even while the driver still holds
/// the bytes, and the stale pair is removed by a detached best-effort task.
/// Every code path behaves identically whether or not that removal ran.
pub struct CompressedCache<D: Driver> {
    driver: Arc<D>,
}

/// In-process cache variant.
pub type InMemoryCache = CompressedCache<MemoryDriver>;

/// Redis-backed cache variant.
pub type RedisCache = CompressedCache<RedisDriver>;

impl<D: Driver> CompressedCache<D> {
    /// Wraps an already-constructed driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    /// Schedules best-effort removal of a masked entry and its marker.
    ///
    /// Detached from the caller: never awaited, failures are logged and
    /// dropped, and the task is abandoned on runtime shutdown.
    fn schedule_masked_cleanup(&self, key: &str) {
        let driver = self.driver.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(MASKED_CLEANUP_DELAY).await;
            for stale in [key.clone(), marker_key(&key)] {
                if let Err(err) = driver.delete(&stale).await {
                    if !err.is_not_exists() {
                        debug!("cleanup of masked entry {:?} failed: {}", stale, err);
                    }
                }
            }
        });
    }

    /// Reads the expiry deadline recorded for `key`, if any.
    ///
    /// Marker entries are advisory: lookup failures and malformed contents
    /// degrade to "no explicit expiry", never to an error.
    async fn read_marker(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.driver.get(&marker_key(key)).await.ok()?;
        let text = std::str::from_utf8(&raw).ok()?;
        match DateTime::parse_from_rfc3339(text) {
            Ok(deadline) => Some(deadline.with_timezone(&Utc)),
            Err(err) => {
                debug!("ignoring malformed expiry marker for {:?}: {}", key, err);
                None
            }
        }
    }
}

impl InMemoryCache {
    /// Builds the in-memory variant from a validated configuration.
    pub fn in_memory(config: MemoryConfig) -> Result<Self> {
        Ok(Self::new(MemoryDriver::new(config)?))
    }
}

impl RedisCache {
    /// Builds the Redis variant from a client.
    pub async fn redis(client: redis::Client) -> Result<Self> {
        Ok(Self::new(RedisDriver::connect(client).await?))
    }
}

#[async_trait]
impl<D: Driver> Cache for CompressedCache<D> {
    async fn set(&self, key: &str, value: &[u8], opts: &[SetOption]) -> Result<()> {
        let options = SetOptions::build(opts);
        let blob = codec::compress(value)?;

        if self.driver.supports_native_ttl() {
            return self.driver.put(key, blob, options.expire).await;
        }

        self.driver.put(key, blob, None).await?;

        match options.expire {
            Some(expire) => {
                let deadline = expire_deadline(expire);
                self.driver
                    .put(&marker_key(key), deadline.to_rfc3339().into_bytes(), None)
                    .await?;
            }
            None => {
                // A key rewritten without a TTL must stop expiring
                if let Err(err) = self.driver.delete(&marker_key(key)).await {
                    if !err.is_not_exists() {
                        return Err(err);
                    }
                }
            }
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let blob = self.driver.get(key).await?;
        let value = codec::decompress(&blob)?;

        if self.driver.supports_native_ttl() {
            return Ok(value);
        }

        if let Some(deadline) = self.read_marker(key).await {
            if Utc::now() >= deadline {
                debug!("masking expired entry {:?}", key);
                self.schedule_masked_cleanup(key);
                return Err(CacheError::NotExists);
            }
        }

        Ok(value)
    }

    async fn has(&self, key: &str) -> bool {
        self.driver.contains(key).await
    }
}

/// Absolute deadline for a requested expiry, saturating at the largest
/// representable timestamp for absurd durations.
fn expire_deadline(expire: Duration) -> DateTime<Utc> {
    let delta = TimeDelta::from_std(expire).unwrap_or(TimeDelta::MAX);
    Utc::now()
        .checked_add_signed(delta)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::with_expire;

    fn test_cache() -> InMemoryCache {
        InMemoryCache::in_memory(MemoryConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_set_with_expire_writes_marker() {
        let cache = test_cache();
        cache
            .set("k", b"v", &[with_expire(Duration::from_secs(60))])
            .await
            .unwrap();

        let marker = cache.driver.get(&marker_key("k")).await.unwrap();
        let deadline = DateTime::parse_from_rfc3339(std::str::from_utf8(&marker).unwrap())
            .unwrap()
            .with_timezone(&Utc);
        assert!(deadline > Utc::now());
    }

    #[tokio::test]
    async fn test_set_without_expire_leaves_no_marker() {
        let cache = test_cache();
        cache.set("k", b"v", &[]).await.unwrap();
        assert!(!cache.driver.contains(&marker_key("k")).await);
    }

    #[tokio::test]
    async fn test_stored_bytes_are_compressed() {
        let cache = test_cache();
        let value = vec![b'x'; 16 * 1024];
        cache.set("k", &value, &[]).await.unwrap();

        let raw = cache.driver.get("k").await.unwrap();
        assert!(raw.len() < value.len());
        assert_ne!(raw, value);
        assert_eq!(cache.get("k").await.unwrap(), value);
    }

    #[tokio::test]
    async fn test_malformed_marker_degrades_to_no_expiry() {
        let cache = test_cache();
        cache.set("k", b"v", &[]).await.unwrap();
        cache
            .driver
            .put(&marker_key("k"), b"garbage".to_vec(), None)
            .await
            .unwrap();

        assert_eq!(cache.get("k").await.unwrap(), b"v".to_vec());
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_codec_error_not_miss() {
        let cache = test_cache();
        cache
            .driver
            .put("k", b"not a zstd frame".to_vec(), None)
            .await
            .unwrap();

        assert!(matches!(
            cache.get("k").await,
            Err(CacheError::Codec { .. })
        ));
    }

    #[test]
    fn test_expire_deadline_saturates() {
        let deadline = expire_deadline(Duration::from_secs(u64::MAX));
        assert_eq!(deadline, DateTime::<Utc>::MAX_UTC);
    }
}
