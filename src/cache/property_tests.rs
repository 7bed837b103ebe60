//! Property-Based Tests for the Cache Layer
//!
//! Uses proptest to verify codec symmetry and storage round trips.

use proptest::prelude::*;

use crate::cache::Cache;
use crate::codec;
use crate::config::MemoryConfig;
use crate::options::with_expire;
use crate::InMemoryCache;

// == Strategies ==
/// Generates cache keys without the marker suffix shape
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:-]{1,64}"
}

/// Generates payloads from empty up to 64 KiB
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..65536)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For any byte sequence, decompress(compress(x)) == x.
    #[test]
    fn prop_codec_symmetry(payload in payload_strategy()) {
        let compressed = codec::compress(&payload).unwrap();
        let restored = codec::decompress(&compressed).unwrap();
        prop_assert_eq!(restored, payload);
    }

    // Compressed output always decodes, regardless of how incompressible
    // the input is.
    #[test]
    fn prop_codec_handles_incompressible_input(payload in prop::collection::vec(any::<u8>(), 1024..4096)) {
        let compressed = codec::compress(&payload).unwrap();
        prop_assert_eq!(codec::decompress(&compressed).unwrap(), payload);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Set followed by get returns the stored value unchanged.
    #[test]
    fn prop_roundtrip_through_cache(key in key_strategy(), payload in payload_strategy()) {
        tokio_test::block_on(async {
            let cache = InMemoryCache::in_memory(MemoryConfig::default()).unwrap();

            cache.set(&key, &payload, &[]).await.unwrap();
            let restored = cache.get(&key).await.unwrap();
            assert_eq!(restored, payload);
            assert!(cache.has(&key).await);
        });
    }

    // A generous unexpired TTL never masks the value.
    #[test]
    fn prop_unexpired_ttl_is_invisible(key in key_strategy(), payload in payload_strategy()) {
        tokio_test::block_on(async {
            let cache = InMemoryCache::in_memory(MemoryConfig::default()).unwrap();

            cache
                .set(&key, &payload, &[with_expire(std::time::Duration::from_secs(3600))])
                .await
                .unwrap();
            assert_eq!(cache.get(&key).await.unwrap(), payload);
        });
    }
}
