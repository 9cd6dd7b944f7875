// Shared test helpers: a procfs fixture directory

#![allow(dead_code)]

use irq_watcher::models::CpuTimes;
use std::path::Path;
use tempfile::TempDir;

pub const INTERRUPTS: &str = "\
           CPU0       CPU1
  0:         40          0   IO-APIC    2-edge      timer
  9:        100        200   IO-APIC    9-fasteoi   acpi
124:        300        400   PCI-MSIX-0000:01:00.0    0-edge      nvme0q0
130:         11         12   PCI-MSI-0000:00:1f.6   0-edge      enp0s31f6
NMI:          1          2   Non-maskable interrupts
LOC:       1000       2000   Local timer interrupts
ERR:          0
";

pub const MEMINFO: &str = "\
MemTotal:       16322392 kB
MemFree:         1050000 kB
MemAvailable:    8000000 kB
Buffers:          123456 kB
SwapTotal:       2097148 kB
SwapFree:        2097000 kB
";

pub fn stat_content(times: &CpuTimes, ctxt: u64) -> String {
    format!(
        "cpu  {} {} {} {} {} {} {} {} 0 0\ncpu0 1 1 1 1 1 1 1 1 0 0\nctxt {}\nbtime 1698004999\n",
        times.user,
        times.nice,
        times.system,
        times.idle,
        times.iowait,
        times.irq,
        times.softirq,
        times.steal,
        ctxt
    )
}

/// Writes `stat` via rename so concurrent readers never see a partial file.
pub fn write_stat(root: &Path, times: &CpuTimes, ctxt: u64) {
    let tmp = root.join("stat.tmp");
    std::fs::write(&tmp, stat_content(times, ctxt)).unwrap();
    std::fs::rename(&tmp, root.join("stat")).unwrap();
}

/// Fixture procfs with all three files.
pub fn procfs_fixture(times: &CpuTimes) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_stat(dir.path(), times, 1000);
    std::fs::write(dir.path().join("interrupts"), INTERRUPTS).unwrap();
    std::fs::write(dir.path().join("meminfo"), MEMINFO).unwrap();
    dir
}

pub fn cpu_times(v: [u64; 8]) -> CpuTimes {
    CpuTimes {
        user: v[0],
        nice: v[1],
        system: v[2],
        idle: v[3],
        iowait: v[4],
        irq: v[5],
        softirq: v[6],
        steal: v[7],
    }
}
