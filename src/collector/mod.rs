//! Interrupt snapshot collection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │           InterruptsCollector            │
//! │   - reads /proc/interrupts (or a copy)   │
//! │   - logs malformed rows                  │
//! │             │                            │
//! │   ┌─────────▼─────────┐                  │
//! │   │ procfs::parser    │ (pure)           │
//! │   └─────────┬─────────┘                  │
//! │             │                            │
//! │      ┌──────▼──────┐                     │
//! │      │  FileSystem │ (trait)             │
//! │      └──────┬──────┘                     │
//! └─────────────┼────────────────────────────┘
//!        ┌──────┴──────┐
//!  ┌─────▼─────┐ ┌─────▼─────┐
//!  │  RealFs   │ │  MockFs   │
//!  └───────────┘ └───────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use irqbal::collector::{InterruptsCollector, MockFs};
//!
//! let fs = MockFs::typical_system();
//! let mut collector = InterruptsCollector::new(fs, "/proc/interrupts");
//! let snapshot = collector.collect().unwrap();
//! assert_eq!(snapshot.cpu_count, 4);
//! ```

mod interrupts;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use interrupts::{CollectError, CollectStats, DEFAULT_INTERRUPTS_PATH, InterruptsCollector};
pub use mock::MockFs;
pub use procfs::{ParseError, ParsedInterrupts, parse_interrupts};
pub use traits::{FileSystem, RealFs};
