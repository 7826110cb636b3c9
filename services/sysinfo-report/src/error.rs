//! Error types

use std::fmt;

use thiserror::Error;

/// Which category of facts a query was asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    Cpu,
    Memory,
    Os,
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactKind::Cpu => write!(f, "CPU"),
            FactKind::Memory => write!(f, "memory"),
            FactKind::Os => write!(f, "OS"),
        }
    }
}

/// Failure while asking the platform for CPU, memory or OS facts
#[derive(Debug, Error)]
pub enum OsQueryError {
    #[error("system introspection is not supported on this platform")]
    Unsupported,

    #[error("{fact} facts unavailable: {reason}")]
    Unavailable { fact: FactKind, reason: String },

    #[error("{fact} query did not complete: {source}")]
    Task {
        fact: FactKind,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl OsQueryError {
    pub fn unavailable(fact: FactKind, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            fact,
            reason: reason.into(),
        }
    }
}

/// Invalid server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {0}")]
    Address(String),
}
