use sysinfo::System;
use tracing::info;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Snapshot of the machine the simulation runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub cpu_brand: String,
    pub logical_cores: usize,
    pub physical_cores: usize,
    pub total_memory_mb: u64,
    pub used_memory_mb: u64,
}

pub fn gather_host_info() -> HostInfo {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    sys.refresh_memory();

    let cpu_brand = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    HostInfo {
        cpu_brand,
        logical_cores: num_cpus::get(),
        physical_cores: num_cpus::get_physical(),
        total_memory_mb: sys.total_memory() / BYTES_PER_MB,
        used_memory_mb: sys.used_memory() / BYTES_PER_MB,
    }
}

pub fn log_host_info(host: &HostInfo) {
    info!(
        cpu = %host.cpu_brand,
        logical_cores = host.logical_cores,
        physical_cores = host.physical_cores,
        "host CPU"
    );
    info!(
        total_mb = host.total_memory_mb,
        used_mb = host.used_memory_mb,
        "host memory"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_info_is_plausible() {
        let host = gather_host_info();

        assert!(host.logical_cores >= 1);
        assert!(host.physical_cores >= 1);
        assert!(!host.cpu_brand.is_empty());
        assert!(host.used_memory_mb <= host.total_memory_mb);
    }
}
