//! irqbal - IRQ distribution analysis and balancing suggestions.
//!
//! Reads a `/proc/interrupts` capture, measures how interrupts are spread over
//! CPUs, and suggests which IRQ to pin to which CPU to even out the load. The
//! suggestions are only printed; nothing is written to `/proc/irq`.
//!
//! - `collector` — snapshot reading and `/proc/interrupts` parsing
//! - `storage` — interrupt record and snapshot models
//! - `analysis` — distribution metrics, balancing strategies, reports
//! - `fmt` — text rendering of reports

pub mod analysis;
pub mod collector;
pub mod fmt;
pub mod storage;
