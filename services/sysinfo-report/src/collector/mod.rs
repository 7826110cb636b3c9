//! Metrics collection
//!
//! [`Collector`] is the read-only front over a [`FactsProvider`]. The
//! default provider is [`SysinfoProvider`]; tests and embedders can swap in
//! their own without touching the collector's contract.

mod provider;
mod system;

pub use self::provider::FactsProvider;
pub use self::system::SysinfoProvider;

use std::sync::Arc;

use crate::error::OsQueryError;
use crate::types::{CpuFacts, MemoryFacts, OsFacts};

/// Fetches fresh fact records from a provider
///
/// Holds no mutable state; clones share the same provider and may be used
/// from any number of tasks at once.
pub struct Collector<P: FactsProvider = SysinfoProvider> {
    provider: Arc<P>,
}

impl<P: FactsProvider> Collector<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Fetch CPU facts
    pub async fn fetch_cpu_facts(&self) -> Result<CpuFacts, OsQueryError> {
        self.provider.query_cpu().await
    }

    /// Fetch memory facts
    pub async fn fetch_memory_facts(&self) -> Result<MemoryFacts, OsQueryError> {
        self.provider.query_memory().await
    }

    /// Fetch OS identity facts
    pub async fn fetch_os_facts(&self) -> Result<OsFacts, OsQueryError> {
        self.provider.query_os().await
    }
}

impl Collector<SysinfoProvider> {
    /// Collector reading from the local machine
    pub fn system() -> Self {
        Self::new(SysinfoProvider::new())
    }
}

impl<P: FactsProvider> Clone for Collector<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl Default for Collector<SysinfoProvider> {
    fn default() -> Self {
        Self::system()
    }
}
