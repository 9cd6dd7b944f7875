// Errors raised while reading kernel pseudo-files

use std::path::PathBuf;

/// Failure to obtain a source table. Malformed numbers inside a table are never errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Pseudo-file missing or inaccessible.
    #[error("error reading {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking read task panicked or was cancelled.
    #[error("procfs read task: {0}")]
    Task(String),
}

impl SourceError {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// Short body for an HTTP 500, without the underlying OS error.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unreadable { path, .. } => format!("error reading {}", path.display()),
            Self::Task(_) => "error reading procfs".to_string(),
        }
    }
}
