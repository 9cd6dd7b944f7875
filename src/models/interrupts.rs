// Interrupt table models and categories

use serde::Serialize;
use std::collections::BTreeMap;

/// Per-CPU counters keyed by CPU index ("0", "1", ...).
pub type PerCpuCounts = BTreeMap<String, u64>;

/// Coarse grouping of interrupt sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "rede")]
    Network,
    #[serde(rename = "armazenamento")]
    Storage,
    #[serde(rename = "usb")]
    Usb,
    #[serde(rename = "entrada")]
    Input,
    #[serde(rename = "gpu")]
    Gpu,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "energia")]
    Power,
    #[serde(rename = "temporizador")]
    Timer,
    #[serde(rename = "inter-cpu")]
    InterCpu,
    #[serde(rename = "kernel")]
    Kernel,
    #[serde(rename = "pcie")]
    Pcie,
    #[serde(rename = "virtualizacao")]
    Virtualization,
    #[serde(rename = "gpio")]
    Gpio,
    #[serde(rename = "outras")]
    Other,
}

impl Category {
    /// Label used on the wire (`por_categoria` keys).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Network => "rede",
            Category::Storage => "armazenamento",
            Category::Usb => "usb",
            Category::Input => "entrada",
            Category::Gpu => "gpu",
            Category::Audio => "audio",
            Category::Power => "energia",
            Category::Timer => "temporizador",
            Category::InterCpu => "inter-cpu",
            Category::Kernel => "kernel",
            Category::Pcie => "pcie",
            Category::Virtualization => "virtualizacao",
            Category::Gpio => "gpio",
            Category::Other => "outras",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One read of `/proc/interrupts`, summed per CPU and per category per CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterruptSnapshot {
    pub per_cpu: PerCpuCounts,
    pub per_category: BTreeMap<Category, PerCpuCounts>,
}

impl InterruptSnapshot {
    /// Adds `count` for `cpu` to both views.
    pub fn record(&mut self, category: Category, cpu: usize, count: u64) {
        let key = cpu.to_string();
        *self.per_cpu.entry(key.clone()).or_default() += count;
        *self
            .per_category
            .entry(category)
            .or_default()
            .entry(key)
            .or_default() += count;
    }

    /// Sum over every CPU in `per_cpu`.
    pub fn total(&self) -> u64 {
        self.per_cpu.values().sum()
    }

    /// Sum over every category and CPU in `per_category`.
    pub fn category_total(&self) -> u64 {
        self.per_category
            .values()
            .flat_map(|per_cpu| per_cpu.values())
            .sum()
    }
}
