//! Text rendering of fact records

use crate::types::{CpuFacts, MemoryFacts, OsFacts};

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Format CPU facts as a single line
pub fn format_cpu(cpu: &CpuFacts) -> String {
    format!(
        "CPU: {} {} ({} cores, {} physical)",
        cpu.manufacturer, cpu.brand, cpu.logical_cores, cpu.physical_cores
    )
}

/// Format memory facts as a single line, in GB with two decimals
pub fn format_memory(mem: &MemoryFacts) -> String {
    format!(
        "Memory: {}GB used / {}GB total ({}GB free)",
        gigabytes(mem.used_bytes),
        gigabytes(mem.total_bytes),
        gigabytes(mem.free_bytes)
    )
}

/// Format OS facts as a single line
pub fn format_os(os: &OsFacts) -> String {
    format!(
        "OS: {} {} ({} - {})",
        os.distribution_name, os.release_version, os.platform_family, os.architecture
    )
}

fn gigabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_GB)
}
