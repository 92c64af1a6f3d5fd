//! # Expiring Cache
//!
//! Thread-safe in-memory key/value store where every value carries the
//! instant at which it stops being valid.
//!
//! Expiry is evaluated lazily on lookup. Expired entries stay in the map
//! until the same key is stored again.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use expiring_cache::{CacheError, ExpiringCache};
//!
//! let cache = ExpiringCache::new();
//!
//! // Never stored: an error naming the key
//! assert_eq!(
//!     cache.get("foo"),
//!     Err(CacheError::KeyNotFound("foo".into()))
//! );
//!
//! cache.put("foo", "bar", Utc::now() + Duration::minutes(1));
//! assert_eq!(cache.get("foo"), Ok(Some("bar")));
//!
//! // Stored but expired: no error, no value
//! cache.put("foo", "bar", Utc::now() - Duration::minutes(1));
//! assert_eq!(cache.get("foo"), Ok(None));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cache;
mod clock;
mod config;

pub use cache::ExpiringCache;
pub use clock::{ManualClock, SystemClock};
pub use config::CacheConfig;

// Re-export the error and traits from core
pub use expiring_cache_core::{Cache, CacheError, Clock, Result};
