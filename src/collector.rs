// Builds one /metrics response: read sources, delta against the retained sample, swap.

use crate::error::SourceError;
use crate::models::MetricsResponse;
use crate::procfs_repo::ProcfsRepo;
use crate::sample_store::{CpuSample, SampleStore};
use crate::usage;

pub struct Collector {
    repo: ProcfsRepo,
    samples: SampleStore,
}

impl Collector {
    pub fn new(repo: ProcfsRepo) -> Self {
        Self {
            repo,
            samples: SampleStore::new(),
        }
    }

    /// Reads all sources and replaces the retained CPU sample.
    ///
    /// The first call only establishes the baseline (no usage or memory block). A source
    /// read failure aborts the call and leaves the retained sample untouched.
    pub async fn collect(&self) -> Result<MetricsResponse, SourceError> {
        // held across the reads: one request at a time reads, computes and swaps
        let mut slot = self.samples.lock().await;

        let (times, context_switches) = self.repo.read_cpu_aggregate().await?;
        let interrupts = self.repo.read_interrupt_table().await?;
        let memory = self.repo.read_memory_info().await?;

        let current = CpuSample::now(times);
        let Some(previous) = slot.swap(current) else {
            tracing::debug!("first sample recorded, usage available from next request");
            return Ok(MetricsResponse::baseline(interrupts, context_switches));
        };
        drop(slot);

        let delta = usage::delta(&previous.times, &current.times);
        if delta.reset {
            tracing::debug!(
                previous = ?previous.times,
                current = ?current.times,
                "cpu counters went backwards, clamped to zero"
            );
        }
        tracing::debug!(
            elapsed_ms = u64::try_from(current.taken_at.duration_since(previous.taken_at).as_millis())
                .unwrap_or(u64::MAX),
            total = u64::try_from(delta.times.total()).unwrap_or(u64::MAX),
            "cpu delta"
        );

        let mut response = MetricsResponse::baseline(interrupts, context_switches);
        response.usage = Some(usage::usage_fractions(&delta.times));
        response.counter_reset = delta.reset;
        response.memory = Some(memory);
        Ok(response)
    }
}
