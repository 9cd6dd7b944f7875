// Single-slot baseline for CPU time deltas, shared by all requests

use crate::models::CpuTimes;
use std::time::Instant;
use tokio::sync::{Mutex, MutexGuard};

/// CPU times and the instant they were read.
#[derive(Debug, Clone, Copy)]
pub struct CpuSample {
    pub times: CpuTimes,
    pub taken_at: Instant,
}

impl CpuSample {
    pub fn now(times: CpuTimes) -> Self {
        Self {
            times,
            taken_at: Instant::now(),
        }
    }
}

/// Holds the most recent sample. Empty until the first request.
///
/// Callers take the lock before reading the new sample and swap while still holding it,
/// so concurrent requests are serialized and every delta is against the sample read
/// immediately before.
#[derive(Debug, Default)]
pub struct SampleStore {
    slot: Mutex<Option<CpuSample>>,
}

/// Exclusive access to the retained sample.
pub struct SampleGuard<'a>(MutexGuard<'a, Option<CpuSample>>);

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> SampleGuard<'_> {
        SampleGuard(self.slot.lock().await)
    }
}

impl SampleGuard<'_> {
    /// Stores `current` and returns the sample it replaces.
    pub fn swap(&mut self, current: CpuSample) -> Option<CpuSample> {
        self.0.replace(current)
    }
}
