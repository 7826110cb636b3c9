//! OS identity fact types

use serde::{Deserialize, Serialize};

/// Operating system identity facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsFacts {
    /// Distribution or product name (e.g., "Ubuntu", "Windows", "Darwin")
    pub distribution_name: String,
    /// Release version (e.g., "22.04")
    pub release_version: String,
    /// Platform family as named by the Rust target (e.g., "linux", "windows", "macos")
    pub platform_family: String,
    /// CPU architecture (e.g., "x64", "arm64"); uncommon targets keep the Rust name
    pub architecture: String,
}
