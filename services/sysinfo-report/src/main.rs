//! System Info Report
//!
//! Prints a greeting, then a one-shot report of the host's CPU, memory and
//! OS identity. Exits with status 1 if any fact cannot be read.
//!
//! # Usage
//!
//! Run directly: `sysinfo-report`
//!
//! Logs go to stderr; set `RUST_LOG=sysinfo_report=debug` to see the queries.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use sysinfo_report::{cli, Collector};

#[derive(Parser)]
#[command(name = "sysinfo-report")]
#[command(version, about = "Print CPU, memory and OS information for this host")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    Cli::parse();
    host_common::init_tracing("sysinfo_report", "warn")?;

    let status = cli::run(&Collector::system(), &mut io::stdout(), &mut io::stderr()).await?;
    Ok(ExitCode::from(status))
}
