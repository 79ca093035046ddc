//! In-memory data model for interrupt snapshots.

pub mod model;

pub use model::{InterruptRecord, Snapshot};
