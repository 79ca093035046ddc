//! IRQ balancing strategies.
//!
//! Every strategy pins each IRQ to exactly one CPU. They differ only in the
//! order IRQs are considered and in how the target CPU is picked:
//!
//! | Strategy                    | Order               | CPU choice            |
//! |-----------------------------|---------------------|-----------------------|
//! | `identity`                  | capture             | unchanged (baseline)  |
//! | `alternating`               | capture             | round-robin           |
//! | `least-used`                | capture             | least loaded so far   |
//! | `sorted-least-used`         | ascending by total  | least loaded so far   |
//! | `reverse-sorted-least-used` | descending by total | least loaded so far   |

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::storage::model::InterruptRecord;

/// Errors that abort a single strategy run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    /// Records exist but there is no CPU to pin them to.
    #[error("cannot pin IRQ {irq}: snapshot has no CPU columns")]
    DegenerateTopology { irq: String },
    /// A record's column count differs from the rest of the snapshot.
    #[error("IRQ {irq} has {found} CPU columns, expected {expected}")]
    WidthMismatch {
        irq: String,
        expected: usize,
        found: usize,
    },
}

/// A suggestion to route all interrupts of one IRQ to one CPU.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinInstruction {
    pub irq: String,
    pub cpu: usize,
}

impl PinInstruction {
    pub fn new(irq: impl Into<String>, cpu: usize) -> Self {
        Self {
            irq: irq.into(),
            cpu,
        }
    }
}

impl fmt::Display for PinInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin IRQ {} to CPU{}", self.irq, self.cpu)
    }
}

impl Serialize for PinInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of applying a strategy to a set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceOutcome {
    /// One record per input, ascending by IRQ number.
    pub records: Vec<InterruptRecord>,
    /// One instruction per pinned IRQ, sorted by rendered text.
    pub instructions: Vec<PinInstruction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceStrategy {
    /// Leaves the captured distribution untouched.
    Identity,
    Alternating,
    LeastUsed,
    SortedLeastUsed,
    /// Largest IRQs first; usually the most even result.
    ReverseSortedLeastUsed,
}

impl BalanceStrategy {
    pub const ALL: [BalanceStrategy; 5] = [
        BalanceStrategy::Identity,
        BalanceStrategy::Alternating,
        BalanceStrategy::LeastUsed,
        BalanceStrategy::SortedLeastUsed,
        BalanceStrategy::ReverseSortedLeastUsed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BalanceStrategy::Identity => "identity",
            BalanceStrategy::Alternating => "alternating",
            BalanceStrategy::LeastUsed => "least-used",
            BalanceStrategy::SortedLeastUsed => "sorted-least-used",
            BalanceStrategy::ReverseSortedLeastUsed => "reverse-sorted-least-used",
        }
    }

    /// Balances `records`, leaving them untouched.
    ///
    /// All records must have the same CPU width. `Identity` returns copies of
    /// the input and no instructions; every other strategy returns one pinned
    /// record and one instruction per input record.
    pub fn apply(self, records: &[InterruptRecord]) -> Result<BalanceOutcome, BalanceError> {
        let Some(first) = records.first() else {
            return Ok(BalanceOutcome::default());
        };
        let cpu_count = first.cpu_count();

        if let Some(bad) = records.iter().find(|r| r.cpu_count() != cpu_count) {
            return Err(BalanceError::WidthMismatch {
                irq: bad.irq().to_string(),
                expected: cpu_count,
                found: bad.cpu_count(),
            });
        }

        let mut outcome = match self {
            BalanceStrategy::Identity => BalanceOutcome {
                records: records.to_vec(),
                instructions: Vec::new(),
            },
            BalanceStrategy::Alternating => {
                pin_each(records.iter(), cpu_count, |pos, _| pos % cpu_count)?
            }
            BalanceStrategy::LeastUsed => least_used(records.iter(), cpu_count)?,
            BalanceStrategy::SortedLeastUsed => {
                let mut ordered: Vec<&InterruptRecord> = records.iter().collect();
                ordered.sort_by_key(|r| r.total());
                least_used(ordered.into_iter(), cpu_count)?
            }
            BalanceStrategy::ReverseSortedLeastUsed => {
                let mut ordered: Vec<&InterruptRecord> = records.iter().collect();
                ordered.sort_by_key(|r| Reverse(r.total()));
                least_used(ordered.into_iter(), cpu_count)?
            }
        };

        outcome.instructions.sort_by_cached_key(|i| i.to_string());
        outcome
            .records
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Ok(outcome)
    }
}

impl fmt::Display for BalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BalanceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BalanceStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = BalanceStrategy::ALL.iter().map(|s| s.name()).collect();
                format!(
                    "unknown strategy '{}', expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// Pins every record in `ordered` to the CPU returned by `choose(position, record)`.
fn pin_each<'a>(
    ordered: impl Iterator<Item = &'a InterruptRecord>,
    cpu_count: usize,
    mut choose: impl FnMut(usize, &InterruptRecord) -> usize,
) -> Result<BalanceOutcome, BalanceError> {
    let mut outcome = BalanceOutcome::default();

    for (pos, record) in ordered.enumerate() {
        if cpu_count == 0 {
            return Err(BalanceError::DegenerateTopology {
                irq: record.irq().to_string(),
            });
        }

        let cpu = choose(pos, record);
        trace!(irq = record.irq(), total = record.total(), cpu, "pinned");

        outcome
            .instructions
            .push(PinInstruction::new(record.irq(), cpu));
        outcome.records.push(record.pinned_to(cpu));
    }

    Ok(outcome)
}

/// Greedy bin packing: each record goes to the CPU with the smallest running
/// total, lowest index on ties.
fn least_used<'a>(
    ordered: impl Iterator<Item = &'a InterruptRecord>,
    cpu_count: usize,
) -> Result<BalanceOutcome, BalanceError> {
    let mut accum = vec![0u64; cpu_count];

    pin_each(ordered, cpu_count, |_, record| {
        let cpu = least_loaded(&accum);
        accum[cpu] = accum[cpu].saturating_add(record.total());
        cpu
    })
}

/// Index of the first minimum. `accum` must not be empty.
fn least_loaded(accum: &[u64]) -> usize {
    accum
        .iter()
        .enumerate()
        .min_by_key(|&(_, total)| *total)
        .map_or(0, |(cpu, _)| cpu)
}
