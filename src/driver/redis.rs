//! Redis Driver Module
//!
//! Networked backend with native per-key expiration, driven through a
//! multiplexed `ConnectionManager`. TTLs are passed straight through to the
//! server, so the layer above never writes expiry markers for this driver.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::driver::Driver;
use crate::error::{CacheError, Result};

// == Redis Driver ==
/// Backend driver over a Redis server.
#[derive(Clone)]
pub struct RedisDriver {
    manager: ConnectionManager,
}

impl RedisDriver {
    /// Connects the driver.
    ///
    /// The manager reconnects on its own after transient failures, so a
    /// single driver instance can be shared for the process lifetime.
    pub async fn connect(client: redis::Client) -> Result<Self> {
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|err| CacheError::backend("connect", "", err))?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl Driver for RedisDriver {
    fn supports_native_ttl(&self) -> bool {
        true
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.manager.clone();
        let written: redis::RedisResult<()> = match ttl {
            // PX keeps sub-second TTLs exact
            Some(ttl) => {
                redis::cmd("SET")
                    .arg(key)
                    .arg(value)
                    .arg("PX")
                    .arg(ttl.as_millis().max(1) as u64)
                    .query_async(&mut conn)
                    .await
            }
            None => conn.set(key, value).await,
        };
        written.map_err(|err| CacheError::backend("set", key, err))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let mut conn = self.manager.clone();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|err| CacheError::backend("get", key, err))?;
        value.ok_or(CacheError::NotExists)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        let removed: u64 = conn
            .del(key)
            .await
            .map_err(|err| CacheError::backend("delete", key, err))?;
        if removed == 0 {
            return Err(CacheError::NotExists);
        }
        Ok(())
    }

    async fn contains(&self, key: &str) -> bool {
        let mut conn = self.manager.clone();
        conn.exists(key).await.unwrap_or(false)
    }
}
