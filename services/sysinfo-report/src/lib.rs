//! System Info Report Library
//!
//! Collects CPU, memory and OS identity facts from the host and renders them
//! as a plain-text report, printed by the `sysinfo-report` binary or served
//! over HTTP by `sysinfo-server`.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use sysinfo_report::{build_report, Collector};
//!
//! let collector = Collector::system();
//! let report = build_report(&collector).await?;
//! println!("{}", report);
//! ```
//!
//! # Usage as Binary
//!
//! Print once: `sysinfo-report`
//!
//! Serve on port 8000: `sysinfo-server`, then `curl localhost:8000/api/v1/sysinfo`

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod format;
pub mod report;
pub mod server;
pub mod types;

pub use collector::{Collector, FactsProvider, SysinfoProvider};
pub use config::ServerConfig;
pub use error::{ConfigError, FactKind, OsQueryError};
pub use report::build_report;
pub use types::{CpuFacts, MemoryFacts, OsFacts};

/// Static greeting shared by both entry points
pub fn hello_world() -> &'static str {
    "Hello World!"
}
