//! Common traits for expiring caches.
//!
//! These traits define the interfaces that different implementations can satisfy,
//! enabling modularity and testing.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Thread-safe store for values which are valid until a caller-specified instant.
///
/// Implementations must be safe to share between threads without external
/// synchronization.
pub trait Cache<T>: Send + Sync {
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The value is valid until `valid_until` and becomes invalid at exactly
    /// that instant. Instants in the past are accepted and produce an entry
    /// that is already expired.
    fn put(&self, key: &str, value: T, valid_until: DateTime<Utc>);

    /// Returns the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` while the entry is valid
    /// - `Ok(None)` once the entry has expired
    /// - `Err(CacheError::KeyNotFound)` if nothing was ever stored under `key`
    fn get(&self, key: &str) -> Result<Option<T>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLOCK TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Source of the current wall-clock time used to judge expiry.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
