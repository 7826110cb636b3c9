//! CPU fact types

use serde::{Deserialize, Serialize};

/// CPU hardware facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuFacts {
    /// CPU manufacturer (e.g., "Intel", "AMD"); unknown CPUID vendors pass through as-is
    pub manufacturer: String,
    /// CPU model name without the manufacturer or trademark marks (e.g., "Ryzen 5")
    pub brand: String,
    /// Number of logical CPU cores (including hyperthreading)
    pub logical_cores: usize,
    /// Number of physical CPU cores
    pub physical_cores: usize,
}
