// GET /metrics payload

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Category, CpuUsage, InterruptSnapshot, MemInfo, PerCpuCounts};

/// One `/metrics` response.
///
/// The first response after startup has no baseline, so `usage`, `memory` and
/// `counter_reset` are all absent; every later response carries `usage` and `memory`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    #[serde(rename = "interrupcoes_tempo", skip_serializing_if = "Option::is_none")]
    pub usage: Option<CpuUsage>,
    /// Set only when a CPU counter went backwards since the previous sample.
    #[serde(
        rename = "reinicio_contador",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub counter_reset: bool,
    #[serde(rename = "por_cpu")]
    pub per_cpu: PerCpuCounts,
    #[serde(rename = "por_categoria")]
    pub per_category: BTreeMap<Category, PerCpuCounts>,
    #[serde(rename = "trocas_de_contexto")]
    pub context_switches: u64,
    #[serde(rename = "memoria", skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemInfo>,
}

impl MetricsResponse {
    /// Response without a usage block (no previous sample yet).
    pub fn baseline(interrupts: InterruptSnapshot, context_switches: u64) -> Self {
        Self {
            usage: None,
            counter_reset: false,
            per_cpu: interrupts.per_cpu,
            per_category: interrupts.per_category,
            context_switches,
            memory: None,
        }
    }

    pub fn is_baseline(&self) -> bool {
        self.usage.is_none()
    }
}
