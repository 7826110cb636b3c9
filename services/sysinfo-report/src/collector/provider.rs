//! Platform introspection seam

use async_trait::async_trait;

use crate::error::OsQueryError;
use crate::types::{CpuFacts, MemoryFacts, OsFacts};

/// A source of raw platform facts
///
/// Implementations must be safe to query concurrently; each call returns a
/// freshly read record.
#[async_trait]
pub trait FactsProvider: Send + Sync + 'static {
    /// Read CPU facts
    async fn query_cpu(&self) -> Result<CpuFacts, OsQueryError>;

    /// Read memory facts
    async fn query_memory(&self) -> Result<MemoryFacts, OsQueryError>;

    /// Read OS identity facts
    async fn query_os(&self) -> Result<OsFacts, OsQueryError>;
}
