//! # Expiring Cache Core
//!
//! Errors and traits shared by expiring cache implementations.
//!
//! - **Errors**: the lookup failure raised for keys that were never stored
//! - **Traits**: the `Cache` capability and the `Clock` used to judge expiry
//!
//! ## Example
//!
//! ```rust
//! use expiring_cache_core::CacheError;
//!
//! let err = CacheError::KeyNotFound("foo".into());
//! assert_eq!(err.to_string(), "key does not exist in cache: foo");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod error;
pub mod traits;

pub use error::{CacheError, Result};
pub use traits::{Cache, Clock};
