//! System Info HTTP Server
//!
//! Serves the system report as plain text.
//!
//! # Usage
//!
//! ```bash
//! sysinfo-server                      # 0.0.0.0:8000
//! sysinfo-server --host 127.0.0.1 --port 9000
//! ```

use anyhow::Result;
use clap::Parser;

use sysinfo_report::{server, Collector, ServerConfig};

#[derive(Parser)]
#[command(name = "sysinfo-server")]
#[command(version, about = "Serve CPU, memory and OS information over plain-text HTTP")]
struct Cli {
    /// Address to bind (default 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default 8000)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    host_common::init_tracing("sysinfo_report", "info")?;

    let config = ServerConfig::default().with_overrides(cli.host, cli.port);

    server::serve(&config, Collector::system()).await
}
