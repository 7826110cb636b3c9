//! Report assembly

use crate::collector::{Collector, FactsProvider};
use crate::error::OsQueryError;
use crate::format::{format_cpu, format_memory, format_os};

pub const REPORT_HEADER: &str = "=== System Information ===";
pub const REPORT_FOOTER: &str = "=========================";

/// Gather all facts concurrently and render the report
///
/// The three queries run at the same time. The first failure fails the
/// whole report; results of the queries still in flight are dropped.
pub async fn build_report<P: FactsProvider>(
    collector: &Collector<P>,
) -> Result<String, OsQueryError> {
    let (cpu, mem, os) = tokio::try_join!(
        collector.fetch_cpu_facts(),
        collector.fetch_memory_facts(),
        collector.fetch_os_facts(),
    )?;

    let lines = [
        REPORT_HEADER.to_string(),
        format_cpu(&cpu),
        format_memory(&mem),
        format_os(&os),
        REPORT_FOOTER.to_string(),
    ];

    Ok(lines.join("\n"))
}
