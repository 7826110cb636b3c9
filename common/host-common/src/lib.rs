//! Host Common - Shared utilities for host services
//!
//! This crate provides functionality shared by the host binaries:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging to stderr
//! - **Responses**: [`text_response`] helpers for plain-text HTTP replies
//!
//! # Example
//!
//! ```rust,ignore
//! use host_common::{init_tracing, text_ok};
//!
//! host_common::init_tracing("my_service", "info")?;
//!
//! async fn hello() -> axum::response::Response {
//!     text_ok("Hello World!")
//! }
//! ```

pub mod init;
pub mod response;

// Re-export commonly used items at crate root
pub use init::init_tracing;
pub use response::{text_ok, text_response};
