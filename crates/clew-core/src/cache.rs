// SPDX-FileCopyrightText: 2025 Clew contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded LRU cache mapping `(source, language, strategy)` to a previously
//! computed [`crate::ConstraintSet`].
//!
//! The distilled extraction cache grew unbounded, keyed on the full source
//! string. This resolves that: the key is a `BLAKE3` digest of the source
//! bytes plus the language and strategy discriminants, and the cache
//! evicts least-recently-used entries once a caller-chosen capacity is
//! exceeded. A capacity of `0` disables caching outright (every lookup
//! misses, nothing is ever stored) for callers that want the orchestrator
//! to stay fully stateless.

use crate::lang::Language;
use lru::LruCache;
use std::num::NonZeroUsize;

/// A content-addressed cache key. `strategy_tag` is an opaque discriminant
/// the caller controls (e.g. `Strategy as u8` in `clew-engine`) — this
/// crate has no opinion about what strategies exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    source_digest: [u8; 32],
    language: Language,
    strategy_tag: u8,
}

impl CacheKey {
    pub fn new(source: &str, language: Language, strategy_tag: u8) -> Self {
        let digest = blake3::hash(source.as_bytes());
        Self {
            source_digest: *digest.as_bytes(),
            language,
            strategy_tag,
        }
    }
}

/// A bounded LRU cache from [`CacheKey`] to an arbitrary cached value,
/// generic over `V` so both `clew-engine`'s `ExtractionResult` and a hole
/// list can reuse the same eviction policy.
pub struct ExtractionCache<V> {
    inner: Option<LruCache<CacheKey, V>>,
}

impl<V: Clone> ExtractionCache<V> {
    /// `capacity == 0` disables the cache: every `get` misses and every
    /// `put` is a no-op.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        self.inner.as_mut()?.get(key).cloned()
    }

    pub fn put(&mut self, key: CacheKey, value: V) {
        if let Some(cache) = self.inner.as_mut() {
            cache.put(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_returns_previously_stored_value() {
        let mut cache: ExtractionCache<u32> = ExtractionCache::new(4);
        let key = CacheKey::new("fn main() {}", Language::Rust, 0);
        cache.put(key, 42);
        assert_eq!(cache.get(&key), Some(42));
    }

    #[test]
    fn exact_match_on_source_content() {
        let key_a = CacheKey::new("fn main() {}", Language::Rust, 0);
        let key_b = CacheKey::new("fn main() { }", Language::Rust, 0);
        assert_ne!(key_a, key_b);
    }

    #[test]
    fn different_strategy_is_a_different_key() {
        let key_a = CacheKey::new("fn main() {}", Language::Rust, 0);
        let key_b = CacheKey::new("fn main() {}", Language::Rust, 1);
        assert_ne!(key_a, key_b);
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let mut cache: ExtractionCache<u32> = ExtractionCache::new(0);
        let key = CacheKey::new("x", Language::Python, 0);
        cache.put(key, 1);
        assert_eq!(cache.get(&key), None);
        assert!(cache.is_disabled());
    }

    #[test]
    fn eviction_drops_least_recently_used() {
        let mut cache: ExtractionCache<u32> = ExtractionCache::new(1);
        let key_a = CacheKey::new("a", Language::Python, 0);
        let key_b = CacheKey::new("b", Language::Python, 0);
        cache.put(key_a, 1);
        cache.put(key_b, 2);
        assert_eq!(cache.get(&key_a), None);
        assert_eq!(cache.get(&key_b), Some(2));
    }
}
