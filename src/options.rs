//! Set Options Module
//!
//! Per-call configuration for `Cache::set`, built from zero or more discrete
//! option values folded into an immutable option set.

use std::time::Duration;

// == Set Option ==
/// A single per-call option for [`Cache::set`](crate::Cache::set).
///
/// Marked `#[non_exhaustive]` so new options can be added without breaking
/// existing call sites.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOption {
    /// Expire the entry after the given duration.
    ///
    /// `Duration::ZERO` is the documented default: no explicit TTL, the
    /// entry is bounded only by the backend's own eviction policy.
    Expire(Duration),
}

/// Requests expiry of the entry after `expire`.
pub fn with_expire(expire: Duration) -> SetOption {
    SetOption::Expire(expire)
}

// == Resolved Options ==
/// The option set a single `set` call resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SetOptions {
    /// Requested TTL; `None` means no explicit expiry was asked for.
    pub expire: Option<Duration>,
}

impl SetOptions {
    /// Folds a list of options left to right over the defaults.
    ///
    /// Later options win over earlier ones for the same field.
    pub(crate) fn build(opts: &[SetOption]) -> Self {
        let mut resolved = Self::default();
        for opt in opts {
            match *opt {
                SetOption::Expire(expire) => {
                    resolved.expire = (!expire.is_zero()).then_some(expire);
                }
            }
        }
        resolved
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SetOptions::build(&[]);
        assert_eq!(options.expire, None);
    }

    #[test]
    fn test_with_expire() {
        let options = SetOptions::build(&[with_expire(Duration::from_secs(60))]);
        assert_eq!(options.expire, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_expire_means_unset() {
        let options = SetOptions::build(&[with_expire(Duration::ZERO)]);
        assert_eq!(options.expire, None);
    }

    #[test]
    fn test_last_option_wins() {
        let options = SetOptions::build(&[
            with_expire(Duration::from_secs(10)),
            with_expire(Duration::from_secs(20)),
        ]);
        assert_eq!(options.expire, Some(Duration::from_secs(20)));
    }
}
