//! Cache Module
//!
//! The public cache contract and the compression/TTL layer implementing it
//! over a backend driver.

mod facade;

#[cfg(test)]
mod property_tests;

pub use facade::{CompressedCache, InMemoryCache, RedisCache};

use async_trait::async_trait;

use crate::error::Result;
use crate::options::SetOption;

// == Cache Trait ==
/// The single contract the rest of an application consumes.
///
/// Two variants implement it, in-memory and Redis-backed, chosen at
/// construction time. `NotExists` from [`get`](Cache::get) is the cache-miss
/// sentinel: treat it as "fetch from the source of truth and repopulate".
#[async_trait]
pub trait Cache: Send + Sync {
    /// Stores `value` under `key`, applying any per-call options.
    async fn set(&self, key: &str, value: &[u8], opts: &[SetOption]) -> Result<()>;

    /// Returns the value stored under `key`.
    ///
    /// Fails with `NotExists` when the key is absent or logically expired.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Cheap existence probe against the backend.
    ///
    /// Never decompresses and never triggers cleanup. On backends without
    /// native TTL this does not consult the expiry marker, so it can report
    /// true for a key `get` would mask as expired, until the best-effort
    /// cleanup removes the stale pair. This asymmetry is part of the
    /// contract.
    async fn has(&self, key: &str) -> bool;
}

// == Marker Key ==
/// Suffix appended to a key to derive its expiry-marker key.
pub(crate) const EXPIRE_MARKER_SUFFIX: &str = "/expire";

/// Derives the expiry-marker key for `key`.
pub(crate) fn marker_key(key: &str) -> String {
    format!("{key}{EXPIRE_MARKER_SUFFIX}")
}
