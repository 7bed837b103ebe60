//! Backend Driver Module
//!
//! Storage adapters behind the cache layer. Drivers are dumb byte stores;
//! compression and TTL emulation live above them.

mod memory;
mod redis;

pub use self::redis::RedisDriver;
pub use memory::MemoryDriver;

pub(crate) use memory::MemoryStore;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// == Driver Trait ==
/// Raw storage contract implemented by every backend.
///
/// A driver maps keys to opaque byte payloads and reports absence with
/// [`CacheError::NotExists`](crate::CacheError::NotExists). Whether the
/// overlay above it needs to emulate per-key TTL is decided by
/// [`supports_native_ttl`](Driver::supports_native_ttl).
///
/// Implementations must be safe for concurrent use; each driver is
/// responsible for the thread-safety of its own store handle. Operations
/// are cancelled by dropping the returned future.
#[async_trait]
pub trait Driver: Send + Sync + 'static {
    /// True when the underlying store expires keys on its own.
    ///
    /// When this returns false the layer above stores a derived expiry
    /// marker next to each value written with a TTL.
    fn supports_native_ttl(&self) -> bool;

    /// Stores `value` under `key`.
    ///
    /// `ttl` is only meaningful for drivers with native TTL support; the
    /// overlay never passes `Some` to a driver without it.
    async fn put(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<()>;

    /// Returns the bytes stored under `key`, or `NotExists`.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Removes `key`, returning `NotExists` if it was absent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Cheap existence probe; failures are reported as absence.
    async fn contains(&self, key: &str) -> bool;
}
