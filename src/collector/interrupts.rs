//! Reads a `/proc/interrupts` capture and turns it into a [`Snapshot`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collector::procfs::{ParseError, parse_interrupts};
use crate::collector::traits::FileSystem;
use crate::storage::model::Snapshot;

/// Default location of the live interrupt table.
pub const DEFAULT_INTERRUPTS_PATH: &str = "/proc/interrupts";

/// Errors that abort snapshot collection.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The capture could not be opened or read.
    #[error("unable to read IRQ info from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The capture has no header line.
    #[error("invalid interrupt table: {0}")]
    Parse(#[from] ParseError),
}

/// Per-line accounting for the last collected capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub parsed: usize,
    pub excluded: usize,
    pub malformed: usize,
}

/// Collects interrupt snapshots through a [`FileSystem`].
pub struct InterruptsCollector<F: FileSystem> {
    fs: F,
    path: PathBuf,
    last_stats: CollectStats,
}

impl<F: FileSystem> InterruptsCollector<F> {
    /// Creates a collector reading `path` (usually `/proc/interrupts`).
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            last_stats: CollectStats::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line counts from the most recent [`collect`](Self::collect) call.
    pub fn last_stats(&self) -> CollectStats {
        self.last_stats
    }

    /// Reads and parses the capture.
    ///
    /// Malformed rows are logged and skipped; symbolic rows (`NMI`, `LOC`, ...)
    /// are dropped silently. Only an unreadable file or a missing header fails.
    pub fn collect(&mut self) -> Result<Snapshot, CollectError> {
        let content = self
            .fs
            .read_to_string(&self.path)
            .map_err(|source| CollectError::Io {
                path: self.path.clone(),
                source,
            })?;

        let parsed = parse_interrupts(&content)?;

        for err in &parsed.malformed {
            warn!(
                "unable to parse line {}: {} ({:?}), skipping",
                err.line, err.message, err.content
            );
        }

        self.last_stats = CollectStats {
            parsed: parsed.records.len(),
            excluded: parsed.excluded.len(),
            malformed: parsed.malformed.len(),
        };

        debug!(
            path = %self.path.display(),
            cpus = parsed.cpu_count,
            parsed = self.last_stats.parsed,
            excluded = self.last_stats.excluded,
            malformed = self.last_stats.malformed,
            "collected interrupt snapshot"
        );

        Ok(Snapshot::new(parsed.cpu_count, parsed.records))
    }
}
