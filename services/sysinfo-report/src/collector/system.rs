//! Facts provider backed by the `sysinfo` crate

use async_trait::async_trait;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::FactsProvider;
use crate::error::{FactKind, OsQueryError};
use crate::types::{CpuFacts, MemoryFacts, OsFacts};

/// Reads facts from the local machine
///
/// Every query builds its own `System` and refreshes only what it needs, so
/// nothing is shared between calls. The reads block, so they run on the
/// blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FactsProvider for SysinfoProvider {
    async fn query_cpu(&self) -> Result<CpuFacts, OsQueryError> {
        run_blocking(FactKind::Cpu, read_cpu).await
    }

    async fn query_memory(&self) -> Result<MemoryFacts, OsQueryError> {
        run_blocking(FactKind::Memory, read_memory).await
    }

    async fn query_os(&self) -> Result<OsFacts, OsQueryError> {
        run_blocking(FactKind::Os, read_os).await
    }
}

async fn run_blocking<T, F>(fact: FactKind, read: F) -> Result<T, OsQueryError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, OsQueryError> + Send + 'static,
{
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(OsQueryError::Unsupported);
    }

    tracing::debug!(%fact, "querying platform");
    tokio::task::spawn_blocking(read)
        .await
        .map_err(|source| OsQueryError::Task { fact, source })?
}

fn read_cpu() -> Result<CpuFacts, OsQueryError> {
    let sys =
        System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
    let cpus = sys.cpus();
    let first_cpu = cpus
        .first()
        .ok_or_else(|| OsQueryError::unavailable(FactKind::Cpu, "no CPUs reported"))?;

    let logical_cores = cpus.len();
    let manufacturer = manufacturer_name(first_cpu.vendor_id());

    Ok(CpuFacts {
        brand: brand_name(first_cpu.brand(), &manufacturer),
        manufacturer,
        logical_cores,
        // Some virtualized hosts do not expose topology
        physical_cores: sys.physical_core_count().unwrap_or(logical_cores),
    })
}

fn read_memory() -> Result<MemoryFacts, OsQueryError> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(OsQueryError::unavailable(
            FactKind::Memory,
            "total memory reported as zero",
        ));
    }

    Ok(MemoryFacts {
        total_bytes: total,
        used_bytes: sys.used_memory(),
        free_bytes: sys.free_memory(),
    })
}

fn read_os() -> Result<OsFacts, OsQueryError> {
    let distribution_name = System::name()
        .ok_or_else(|| OsQueryError::unavailable(FactKind::Os, "OS name not reported"))?;
    let release_version = System::os_version()
        .or_else(System::kernel_version)
        .ok_or_else(|| OsQueryError::unavailable(FactKind::Os, "OS release not reported"))?;

    Ok(OsFacts {
        distribution_name,
        release_version,
        platform_family: std::env::consts::OS.to_string(),
        architecture: architecture_name(std::env::consts::ARCH),
    })
}

/// Map a CPUID vendor string to the manufacturer's common name
fn manufacturer_name(vendor_id: &str) -> String {
    match vendor_id.trim() {
        "GenuineIntel" => "Intel".to_string(),
        "AuthenticAMD" | "AMDisbetter!" => "AMD".to_string(),
        other => other.to_string(),
    }
}

/// Drop trademark marks and the leading manufacturer from a brand string
fn brand_name(raw: &str, manufacturer: &str) -> String {
    let cleaned = ["(R)", "(r)", "(TM)", "(tm)"]
        .iter()
        .fold(raw.to_string(), |brand, mark| brand.replace(mark, ""));
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    match words.split_first() {
        Some((first, rest))
            if !manufacturer.is_empty()
                && !rest.is_empty()
                && first.eq_ignore_ascii_case(manufacturer) =>
        {
            rest.join(" ")
        }
        _ => words.join(" "),
    }
}

/// Short architecture names (`x64`, `arm64`) for the common targets
fn architecture_name(arch: &str) -> String {
    match arch {
        "x86_64" => "x64".to_string(),
        "x86" => "ia32".to_string(),
        "aarch64" => "arm64".to_string(),
        other => other.to_string(),
    }
}
