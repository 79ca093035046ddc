//! Parsers for the Linux `/proc` interrupt table.

pub mod parser;

pub use parser::{ParseError, ParsedInterrupts, parse_interrupts};
