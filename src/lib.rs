//! Bytecache - A pluggable key/value cache
//!
//! Stores opaque byte payloads behind a single contract with two
//! interchangeable backends: an in-process store bounded by a global life
//! window, and Redis with native per-key expiration. Payloads are
//! transparently zstd-compressed, and per-key TTL is emulated with expiry
//! markers on the backend that lacks it.

pub mod cache;
pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod options;

mod tasks;

pub use cache::{Cache, CompressedCache, InMemoryCache, RedisCache};
pub use config::MemoryConfig;
pub use error::{CacheError, Result};
pub use options::{with_expire, SetOption};
