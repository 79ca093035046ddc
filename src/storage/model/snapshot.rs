//! One parsed capture of the interrupt table.

use serde::Serialize;

use super::InterruptRecord;

/// Balanceable interrupt records of a single capture.
///
/// `cpu_count` is taken from the first parsed record; the parser rejects any
/// later row whose width differs, so every record carries exactly
/// `cpu_count` columns.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct Snapshot {
    pub cpu_count: usize,
    pub records: Vec<InterruptRecord>,
}

impl Snapshot {
    pub fn new(cpu_count: usize, records: Vec<InterruptRecord>) -> Self {
        Self { cpu_count, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all interrupt counts across every record and CPU.
    pub fn total_interrupts(&self) -> u64 {
        self.records.iter().map(InterruptRecord::total).sum()
    }
}
