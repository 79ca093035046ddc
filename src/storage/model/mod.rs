//! Data models for parsed interrupt tables.
//!
//! - [`interrupt`]: one row of `/proc/interrupts` for a single IRQ source
//! - [`snapshot`]: all balanceable rows of one capture plus its CPU count

mod interrupt;
mod snapshot;

pub use interrupt::InterruptRecord;
pub use snapshot::Snapshot;
