//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

/// Boxed error type carried by backend failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// `NotExists` is the only variant callers are expected to branch on; it
/// signals a cache miss (absent or logically expired). Everything else is a
/// hard failure to be propagated.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is absent from the backend, or logically expired
    #[error("not exists")]
    NotExists,

    /// Payload could not be compressed or decompressed
    #[error("codec failure")]
    Codec {
        #[source]
        source: std::io::Error,
    },

    /// The underlying store failed, wrapped with operation context
    #[error("backend {op} failed for key {key:?}")]
    Backend {
        /// Operation name (`set`, `get`, `delete`, `connect`, ...)
        op: &'static str,
        /// Key the operation targeted (empty for connection-level failures)
        key: String,
        #[source]
        source: BoxError,
    },

    /// Construction-time configuration was rejected
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    /// Wraps a compression/decompression failure.
    pub(crate) fn codec(source: std::io::Error) -> Self {
        CacheError::Codec { source }
    }

    /// Wraps a backend failure with operation context.
    pub(crate) fn backend(op: &'static str, key: &str, source: impl Into<BoxError>) -> Self {
        CacheError::Backend {
            op,
            key: key.to_string(),
            source: source.into(),
        }
    }

    /// Returns true for the cache-miss sentinel.
    ///
    /// Callers treat this as "go fetch from the source of truth and
    /// repopulate"; all other variants should be propagated.
    pub fn is_not_exists(&self) -> bool {
        matches!(self, CacheError::NotExists)
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_exists() {
        assert!(CacheError::NotExists.is_not_exists());
        assert!(!CacheError::InvalidConfig("bad".to_string()).is_not_exists());

        let backend = CacheError::backend("get", "k", "boom".to_string());
        assert!(!backend.is_not_exists());
    }

    #[test]
    fn test_backend_error_carries_context() {
        let err = CacheError::backend("set", "article:42", "connection reset".to_string());
        let message = err.to_string();
        assert!(message.contains("set"));
        assert!(message.contains("article:42"));
    }
}
