//! Text rendering of balance reports.
//!
//! Pure functions producing `String`s; the binary decides where they go.

use std::fmt::Write;

use crate::analysis::BalanceReport;

/// Placeholder for statistics that are not defined for the snapshot.
pub const UNDEFINED: &str = "undefined";

/// Format a per-CPU share: `"42.17%"`, or [`UNDEFINED`].
pub fn format_percent(share: Option<f64>) -> String {
    match share {
        Some(v) => format!("{:.2}%", v),
        None => UNDEFINED.to_string(),
    }
}

/// Format a whole distribution: `"[CPU0 70.00%, CPU1 30.00%]"`.
pub fn format_distribution(distribution: &[Option<f64>]) -> String {
    let parts: Vec<String> = distribution
        .iter()
        .enumerate()
        .map(|(cpu, share)| format!("CPU{} {}", cpu, format_percent(*share)))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Format a standard deviation with six decimals, or [`UNDEFINED`].
pub fn format_stdev(stdev: Option<f64>) -> String {
    match stdev {
        Some(v) => format!("{:.6}", v),
        None => UNDEFINED.to_string(),
    }
}

fn write_info(out: &mut String, title: &str, report: &BalanceReport) {
    let _ = writeln!(out, "{}:", title);
    let _ = writeln!(out, "\tstdev: {:>12}", format_stdev(report.stdev));
    let _ = writeln!(
        out,
        "\tdistribution %'s: {}",
        format_distribution(&report.distribution)
    );
}

/// Renders the captured state followed by one strategy's suggestions.
///
/// ```text
/// Current Balance Info:
///     stdev:    43.519128
///     distribution %'s: [CPU0 88.49%, CPU1 3.19%, CPU2 1.39%, CPU3 6.93%]
/// Balancing Instructions (reverse-sorted-least-used):
///     pin IRQ 0 to CPU3
///     ...
/// Projected Balance Info (reverse-sorted-least-used):
///     ...
/// ```
pub fn render_balance(current: &BalanceReport, projected: &BalanceReport) -> String {
    let mut out = String::new();
    write_info(&mut out, "Current Balance Info", current);

    let _ = writeln!(out, "Balancing Instructions ({}):", projected.strategy);
    if projected.instructions.is_empty() {
        let _ = writeln!(out, "\t(none)");
    }
    for instruction in &projected.instructions {
        let _ = writeln!(out, "\t{}", instruction);
    }

    write_info(
        &mut out,
        &format!("Projected Balance Info ({})", projected.strategy),
        projected,
    );
    out
}

/// Renders a ranked comparison, one strategy per line.
pub fn render_comparison(reports: &[BalanceReport]) -> String {
    let width = reports
        .iter()
        .map(|r| r.strategy.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {:>12}  distribution %'s", "strategy", "stdev");
    for report in reports {
        let _ = writeln!(
            out,
            "{:<width$}  {:>12}  {}",
            report.strategy.name(),
            format_stdev(report.stdev),
            format_distribution(&report.distribution),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BalanceStrategy, build_report};
    use crate::storage::model::InterruptRecord;

    fn records() -> Vec<InterruptRecord> {
        vec![
            InterruptRecord::new("0", "IO-APIC", "timer", vec![50, 0]),
            InterruptRecord::new("6", "IO-APIC", "floppy", vec![10, 0]),
            InterruptRecord::new("8", "IO-APIC", "rtc0", vec![0, 10]),
        ]
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(42.1666)), "42.17%");
        assert_eq!(format_percent(None), "undefined");
    }

    #[test]
    fn test_format_distribution() {
        assert_eq!(
            format_distribution(&[Some(70.0), Some(30.0)]),
            "[CPU0 70.00%, CPU1 30.00%]"
        );
        assert_eq!(format_distribution(&[]), "[]");
    }

    #[test]
    fn test_format_stdev() {
        assert_eq!(format_stdev(Some(0.5)), "0.500000");
        assert_eq!(format_stdev(None), "undefined");
    }

    #[test]
    fn test_render_balance() {
        let current = build_report(BalanceStrategy::Identity, &records()).unwrap();
        let projected = build_report(BalanceStrategy::ReverseSortedLeastUsed, &records()).unwrap();
        let text = render_balance(&current, &projected);

        assert!(text.starts_with("Current Balance Info:\n"));
        assert!(text.contains("Balancing Instructions (reverse-sorted-least-used):\n"));
        assert!(text.contains("\tpin IRQ 0 to CPU0\n\tpin IRQ 6 to CPU1\n\tpin IRQ 8 to CPU1\n"));
        assert!(text.contains("Projected Balance Info (reverse-sorted-least-used):\n"));
        assert!(text.contains("[CPU0 85.71%, CPU1 14.29%]"));
        assert!(text.contains("[CPU0 71.43%, CPU1 28.57%]"));
    }

    #[test]
    fn test_render_balance_identity_has_no_instructions() {
        let current = build_report(BalanceStrategy::Identity, &records()).unwrap();
        let text = render_balance(&current, &current);
        assert!(text.contains("Balancing Instructions (identity):\n\t(none)\n"));
    }

    #[test]
    fn test_render_comparison() {
        let reports = crate::analysis::compare_strategies(&records()).unwrap();
        let text = render_comparison(&reports);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + BalanceStrategy::ALL.len());
        assert!(lines[0].starts_with("strategy"));
        assert!(text.contains("reverse-sorted-least-used"));
    }
}
