//! Parser for `/proc/interrupts` content.
//!
//! This is a pure function over the file text so it can be tested with string
//! inputs. Reading the file and logging per-line problems is the job of
//! [`InterruptsCollector`](crate::collector::InterruptsCollector).

use crate::storage::model::InterruptRecord;

/// A line that does not have the shape of an interrupt row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number within the snapshot.
    pub line: usize,
    pub message: String,
    /// The offending line, trimmed.
    pub content: String,
}

impl ParseError {
    pub fn new(line: usize, msg: impl Into<String>, content: &str) -> Self {
        Self {
            line,
            message: msg.into(),
            content: content.trim().to_string(),
        }
    }
}

/// Parsed data from `/proc/interrupts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInterrupts {
    /// Width of the first parsed row. Zero when no row parsed.
    pub cpu_count: usize,
    /// Balanceable (numeric) IRQ rows in file order.
    pub records: Vec<InterruptRecord>,
    /// Identifiers of symbolic rows (`NMI`, `LOC`, `ERR`, ...) that cannot be pinned.
    pub excluded: Vec<String>,
    /// Lines that were skipped because they did not match the row shape.
    pub malformed: Vec<ParseError>,
}

/// Outcome of parsing one data line.
#[derive(Debug, PartialEq)]
enum Row {
    Irq(InterruptRecord),
    /// Aggregate counter class; recognized but not balanceable.
    Symbolic(String),
}

/// Parses `/proc/interrupts` content.
///
/// Format:
/// ```text
///            CPU0       CPU1
///   0:         22          0   IO-APIC   2-edge      timer
///  24:     104223      93456   PCI-MSI 327680-edge   xhci_hcd
/// NMI:         12         10   Non-maskable interrupts
/// ```
///
/// The first line is the header and is skipped whatever it contains; only an
/// input with no lines at all is rejected. Every other line is
/// `<id>: <count>... <type> <device...>`. Rows whose identifier is not a plain
/// IRQ number (`NMI`, `LOC`, `IPI0`, ...) are excluded, rows that don't match
/// are reported in [`ParsedInterrupts::malformed`], blank lines are ignored.
/// Counts are `unsigned int` in the kernel; larger values are malformed.
pub fn parse_interrupts(content: &str) -> Result<ParsedInterrupts, ParseError> {
    let mut lines = content.lines().enumerate();

    if lines.next().is_none() {
        return Err(ParseError::new(1, "missing header line", ""));
    }

    let mut parsed = ParsedInterrupts::default();

    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_interrupt_line(line) {
            Ok(Row::Symbolic(id)) => parsed.excluded.push(id),
            Ok(Row::Irq(record)) => {
                if parsed.records.is_empty() {
                    parsed.cpu_count = record.cpu_count();
                } else if record.cpu_count() != parsed.cpu_count {
                    parsed.malformed.push(ParseError::new(
                        line_no,
                        format!(
                            "expected {} CPU columns, found {}",
                            parsed.cpu_count,
                            record.cpu_count()
                        ),
                        line,
                    ));
                    continue;
                }
                parsed.records.push(record);
            }
            Err(msg) => parsed.malformed.push(ParseError::new(line_no, msg, line)),
        }
    }

    Ok(parsed)
}

fn parse_interrupt_line(line: &str) -> Result<Row, String> {
    let (id, rest) = line
        .split_once(':')
        .ok_or_else(|| "missing ':' after IRQ identifier".to_string())?;

    let id = id.trim();
    if id.is_empty() {
        return Err("empty IRQ identifier".to_string());
    }
    if id.contains(char::is_whitespace) {
        return Err(format!("invalid IRQ identifier '{}'", id));
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Row::Symbolic(id.to_string()));
    }

    let mut tokens = rest.split_whitespace().peekable();

    let mut per_cpu = Vec::new();
    while let Some(token) = tokens.next_if(|t| t.chars().all(|c| c.is_ascii_digit())) {
        let count: u32 = token
            .parse()
            .map_err(|_| format!("count {} out of range for IRQ {}", token, id))?;
        per_cpu.push(u64::from(count));
    }
    if per_cpu.is_empty() {
        return Err(format!("no per-CPU counts for IRQ {}", id));
    }

    let irq_type = tokens
        .next()
        .ok_or_else(|| format!("missing type and device for IRQ {}", id))?;
    let device: Vec<&str> = tokens.collect();
    if device.is_empty() {
        return Err(format!("missing device label for IRQ {}", id));
    }

    Ok(Row::Irq(InterruptRecord::new(
        id,
        irq_type,
        device.join(" "),
        per_cpu,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_CPU: &str = "\
           CPU0       CPU1       CPU2       CPU3
  0:         22          0          0          0   IO-APIC   2-edge      timer
  8:          0          0          1          0   IO-APIC   8-edge      rtc0
 24:     104223      93456       1200        880   PCI-MSI 327680-edge      xhci_hcd
NMI:         12         10         11          9   Non-maskable interrupts
LOC:    5123456    4987654    5001234    4999999   Local timer interrupts
ERR:          0
";

    #[test]
    fn test_parse_interrupts_basic() {
        let parsed = parse_interrupts(FOUR_CPU).unwrap();

        assert_eq!(parsed.cpu_count, 4);
        assert_eq!(parsed.records.len(), 3);
        assert!(parsed.malformed.is_empty());

        let timer = &parsed.records[0];
        assert_eq!(timer.irq(), "0");
        assert_eq!(timer.irq_type(), "IO-APIC");
        assert_eq!(timer.device(), "2-edge timer");
        assert_eq!(timer.per_cpu(), &[22, 0, 0, 0]);
        assert_eq!(timer.total(), 22);

        let xhci = &parsed.records[2];
        assert_eq!(xhci.irq(), "24");
        assert_eq!(xhci.total(), 104223 + 93456 + 1200 + 880);
    }

    #[test]
    fn test_parse_interrupts_excludes_symbolic_rows() {
        let parsed = parse_interrupts(FOUR_CPU).unwrap();
        assert_eq!(parsed.excluded, vec!["NMI", "LOC", "ERR"]);
        assert!(parsed.records.iter().all(|r| r.irq_number().is_some()));
    }

    #[test]
    fn test_parse_interrupts_skips_malformed_and_continues() {
        let content = "\
           CPU0       CPU1
  1:          9          0   IO-APIC   1-edge      i8042
garbage line without colon
  5:        abc        def   IO-APIC   5-edge      parport0
  7:          3          4
  9:          0          0   IO-APIC   9-fasteoi   acpi
";
        let parsed = parse_interrupts(content).unwrap();

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].irq(), "9");
        assert_eq!(parsed.malformed.len(), 3);
        assert_eq!(parsed.malformed[0].line, 3);
        assert_eq!(parsed.malformed[1].line, 4);
        assert_eq!(parsed.malformed[2].line, 5);
        assert_eq!(parsed.malformed[2].content, "7:          3          4");
    }

    #[test]
    fn test_parse_interrupts_rejects_width_mismatch() {
        let content = "\
           CPU0       CPU1
 10:          5          6   PCI-MSI   eth0
 11:          1          2          3   PCI-MSI   eth1
";
        let parsed = parse_interrupts(content).unwrap();

        assert_eq!(parsed.cpu_count, 2);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.malformed.len(), 1);
        assert!(parsed.malformed[0].message.contains("expected 2 CPU columns"));
    }

    #[test]
    fn test_parse_interrupts_excludes_arm_ipi_rows() {
        let content = "\
           CPU0       CPU1
 11:      81234      79123     GICv3  27 Level     arch_timer
IPI0:      4521       4876       Rescheduling interrupts
IPI1:        12         15       Function call interrupts
Err:          0
";
        let parsed = parse_interrupts(content).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].irq(), "11");
        assert_eq!(parsed.excluded, vec!["IPI0", "IPI1", "Err"]);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_parse_interrupts_count_out_of_range() {
        let content = "\
           CPU0       CPU1
  1: 18446744073709551615          1   IO-APIC   i8042
  2:          3          4   IO-APIC   cascade
";
        let parsed = parse_interrupts(content).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].irq(), "2");
        assert_eq!(parsed.malformed.len(), 1);
        assert_eq!(parsed.malformed[0].line, 2);
        assert!(parsed.malformed[0].message.contains("out of range"));
    }

    #[test]
    fn test_parse_interrupts_header_only() {
        let parsed = parse_interrupts("           CPU0       CPU1\n").unwrap();
        assert_eq!(parsed.cpu_count, 0);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_parse_interrupts_missing_header() {
        assert!(parse_interrupts("").is_err());
    }

    #[test]
    fn test_parse_interrupts_blank_header_is_skipped() {
        let parsed = parse_interrupts("\n  0: 1 IO-APIC timer\n").unwrap();
        assert_eq!(parsed.cpu_count, 1);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].device(), "timer");
    }

    #[test]
    fn test_parse_interrupts_ignores_blank_lines() {
        let content = "CPU0\n\n  3:  7  IO-APIC  serial\n\n";
        let parsed = parse_interrupts(content).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.malformed.is_empty());
    }
}
