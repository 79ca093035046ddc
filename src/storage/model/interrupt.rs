//! Per-IRQ interrupt counters parsed from `/proc/interrupts`.

use serde::{Deserialize, Serialize};

/// Interrupt counters for one IRQ line.
///
/// Source: one row of `/proc/interrupts`
///
/// Records are created by the parser and never mutated afterwards. Balancing
/// produces new records through `pinned_to`, so the source
/// snapshot can be reused across any number of strategies.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct InterruptRecord {
    /// IRQ identifier (e.g., "0", "24", "131").
    /// Source: first column of `/proc/interrupts`, without the trailing colon
    irq: String,

    /// Interrupt controller / trigger type (e.g., "IR-PCI-MSI", "IO-APIC").
    /// Source: first token after the per-CPU counts
    irq_type: String,

    /// Device or action name (e.g., "timer", "2-edge timer", "nvme0q1").
    /// Source: remaining tokens after the type, joined by a single space
    device: String,

    /// Interrupt count per CPU, indexed by CPU number.
    /// Source: `/proc/interrupts` columns 1..=N
    per_cpu: Vec<u64>,

    /// Sum of `per_cpu`, saturating at `u64::MAX`.
    total: u64,
}

impl InterruptRecord {
    /// Creates a record, computing `total` from the per-CPU counts.
    pub fn new(
        irq: impl Into<String>,
        irq_type: impl Into<String>,
        device: impl Into<String>,
        per_cpu: Vec<u64>,
    ) -> Self {
        let total = per_cpu.iter().fold(0u64, |acc, &c| acc.saturating_add(c));
        Self {
            irq: irq.into(),
            irq_type: irq_type.into(),
            device: device.into(),
            per_cpu,
            total,
        }
    }

    pub fn irq(&self) -> &str {
        &self.irq
    }

    pub fn irq_type(&self) -> &str {
        &self.irq_type
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn per_cpu(&self) -> &[u64] {
        &self.per_cpu
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of CPU columns this record carries.
    pub fn cpu_count(&self) -> usize {
        self.per_cpu.len()
    }

    /// Numeric IRQ line, or `None` for symbolic classes such as `NMI` or `LOC`.
    pub fn irq_number(&self) -> Option<u32> {
        self.irq.parse().ok()
    }

    /// Returns a copy of this record with every interrupt moved onto `cpu`.
    ///
    /// The copy keeps the identity fields and `total`; all other CPU columns
    /// become zero. Callers check `cpu` against [`cpu_count`](Self::cpu_count)
    /// first; balancing only picks indices inside the record's width.
    pub(crate) fn pinned_to(&self, cpu: usize) -> Self {
        let mut per_cpu = vec![0; self.per_cpu.len()];
        per_cpu[cpu] = self.total;
        Self {
            irq: self.irq.clone(),
            irq_type: self.irq_type.clone(),
            device: self.device.clone(),
            per_cpu,
            total: self.total,
        }
    }

    /// Key used to present records in ascending IRQ order.
    ///
    /// Numeric identifiers compare by value; anything else sorts after them
    /// by string so the order stays total.
    pub(crate) fn sort_key(&self) -> (u32, &str) {
        (self.irq_number().unwrap_or(u32::MAX), self.irq.as_str())
    }
}
