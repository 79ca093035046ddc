//! Balancing analysis over a parsed interrupt snapshot.
//!
//! - [`distribution`]: per-CPU share of interrupts and its standard deviation
//! - [`strategy`]: the balancing strategies and pin instructions
//! - [`report`]: strategy output bundled with its metrics

pub mod distribution;
pub mod report;
pub mod strategy;

pub use distribution::{compute_distribution, compute_stdev, cpu_totals};
pub use report::{BalanceReport, build_report, compare_strategies};
pub use strategy::{BalanceError, BalanceOutcome, BalanceStrategy, PinInstruction};
