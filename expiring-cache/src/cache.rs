//! In-memory cache with caller-declared expiration.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::trace;

use expiring_cache_core::error::{CacheError, Result};
use expiring_cache_core::traits::{Cache, Clock};

use crate::clock::SystemClock;
use crate::config::CacheConfig;

/// Value paired with the instant it stops being valid.
#[derive(Clone)]
struct CacheEntry<T> {
    value: T,
    valid_until: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Validity is exclusive: the entry is expired at `valid_until` itself.
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.valid_until
    }
}

/// Thread-safe in-memory cache whose values expire at caller-supplied instants.
///
/// A single reader/writer lock guards the map. Lookups share the lock and
/// run in parallel; stores take it exclusively, so a lookup always sees
/// an entry either entirely before or entirely after a concurrent store.
///
/// Expired entries are never removed. They stay in the map until the same
/// key is stored again.
pub struct ExpiringCache<T, C = SystemClock> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    clock: C,
}

impl<T> ExpiringCache<T, SystemClock> {
    /// Creates an empty cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_config_and_clock(config, SystemClock)
    }
}

impl<T, C: Clock> ExpiringCache<T, C> {
    /// Creates an empty cache that judges expiry against `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_config_and_clock(CacheConfig::default(), clock)
    }

    /// Creates an empty cache with custom configuration and clock.
    pub fn with_config_and_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            clock,
        }
    }

    /// Stores `value` under `key` until `valid_until`.
    ///
    /// Any previous entry for `key` is replaced whole, value and expiry
    /// both. Instants in the past are accepted.
    pub fn put(&self, key: impl Into<String>, value: T, valid_until: DateTime<Utc>) {
        let key = key.into();
        trace!(key = %key, %valid_until, "Storing entry");

        self.entries
            .write()
            .insert(key, CacheEntry { value, valid_until });
    }

    /// Returns the value under `key` if it is still valid.
    ///
    /// Returns `Ok(None)` for an entry that exists but has expired, and
    /// `Err(CacheError::KeyNotFound)` if nothing was ever stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<T>>
    where
        T: Clone,
    {
        let entries = self.entries.read();
        let entry = entries
            .get(key)
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))?;

        if !entry.is_valid_at(self.clock.now()) {
            trace!(key, valid_until = %entry.valid_until, "Entry expired");
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }
}

impl<T> Default for ExpiringCache<T, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for ExpiringCache<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.read().len())
            .finish_non_exhaustive()
    }
}

impl<T, C> Cache<T> for ExpiringCache<T, C>
where
    T: Clone + Send + Sync,
    C: Clock,
{
    fn put(&self, key: &str, value: T, valid_until: DateTime<Utc>) {
        ExpiringCache::put(self, key, value, valid_until);
    }

    fn get(&self, key: &str) -> Result<Option<T>> {
        ExpiringCache::get(self, key)
    }
}
