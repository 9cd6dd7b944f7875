// Kernel counters via procfs text tables

pub mod parse;

use crate::error::SourceError;
use crate::models::{CpuTimes, InterruptSnapshot, MemInfo};
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const STAT: &str = "stat";
pub const INTERRUPTS: &str = "interrupts";
pub const MEMINFO: &str = "meminfo";

/// Reads `stat`, `interrupts` and `meminfo` under a procfs root (normally `/proc`).
/// Every call reads the file fresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct ProcfsRepo {
    root: PathBuf,
}

impl ProcfsRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Aggregate CPU times and the context switch counter.
    #[instrument(skip(self), fields(repo = "procfs", operation = "read_cpu_aggregate"))]
    pub async fn read_cpu_aggregate(&self) -> Result<(CpuTimes, u64), SourceError> {
        let content = self.read(STAT).await?;
        Ok(parse::parse_stat(&content))
    }

    #[instrument(skip(self), fields(repo = "procfs", operation = "read_interrupt_table"))]
    pub async fn read_interrupt_table(&self) -> Result<InterruptSnapshot, SourceError> {
        let content = self.read(INTERRUPTS).await?;
        Ok(parse::parse_interrupts(&content))
    }

    #[instrument(skip(self), fields(repo = "procfs", operation = "read_memory_info"))]
    pub async fn read_memory_info(&self) -> Result<MemInfo, SourceError> {
        let content = self.read(MEMINFO).await?;
        Ok(parse::parse_meminfo(&content))
    }

    async fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.root.join(name);
        tokio::task::spawn_blocking(move || {
            // device names are not guaranteed UTF-8; bad bytes must not fail the read
            std::fs::read(&path)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|e| SourceError::unreadable(path, e))
        })
        .await
        .map_err(|e| SourceError::Task(e.to_string()))?
    }
}
