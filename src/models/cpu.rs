// CPU time accounting models

use serde::Serialize;

/// Cumulative CPU time counters from the aggregate `cpu` line of `/proc/stat`, in jiffies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTimes {
    /// Sum of all eight counters, widened so it cannot overflow.
    pub fn total(&self) -> u128 {
        Self::sum(&[
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
        ])
    }

    pub(crate) fn sum(fields: &[u64]) -> u128 {
        fields.iter().map(|&v| u128::from(v)).sum()
    }
}

/// Fractions of elapsed CPU time between two samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CpuUsage {
    /// (irq + softirq) / total
    #[serde(rename = "interrupcoes")]
    pub interrupts: f64,
    /// (user + nice + system) / total
    pub util: f64,
    /// (idle + iowait) / total
    #[serde(rename = "ocioso")]
    pub idle: f64,
}
