//! Cache configuration.

use serde::{Deserialize, Serialize};

/// Cache configuration.
///
/// There is no entry limit. `initial_capacity` only sizes the map up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries to preallocate room for
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}
