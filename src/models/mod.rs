// Domain models

mod cpu;
mod interrupts;
mod memory;
mod metrics;

pub use cpu::{CpuTimes, CpuUsage};
pub use interrupts::{Category, InterruptSnapshot, PerCpuCounts};
pub use memory::MemInfo;
pub use metrics::MetricsResponse;
