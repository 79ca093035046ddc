//! Mock filesystem and fixture captures for testing.
//!
//! This module provides `MockFs` and pre-built `/proc/interrupts` scenarios so
//! the collector and the balancing strategies can be tested without Linux.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::{MALFORMED_INTERRUPTS, SINGLE_CPU_INTERRUPTS, TYPICAL_INTERRUPTS};
