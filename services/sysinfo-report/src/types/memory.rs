//! Memory fact types

use serde::{Deserialize, Serialize};

/// Physical memory facts
///
/// `used_bytes + free_bytes` need not add up to `total_bytes`: caches and
/// buffers are counted in neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryFacts {
    /// Total physical memory in bytes
    pub total_bytes: u64,
    /// Used physical memory in bytes
    pub used_bytes: u64,
    /// Free physical memory in bytes
    pub free_bytes: u64,
}
