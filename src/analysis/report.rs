//! Report assembly: run a strategy and measure the result.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::distribution::{compute_distribution, compute_stdev};
use super::strategy::{BalanceError, BalanceStrategy, PinInstruction};
use crate::storage::model::InterruptRecord;

/// Outcome of one strategy over one snapshot, with its distribution metrics.
///
/// `distribution` and `stdev` are measured on `balanced_records`, so the
/// `identity` report describes the captured state and every other report the
/// projected state after applying `instructions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub strategy: BalanceStrategy,
    pub balanced_records: Vec<InterruptRecord>,
    pub instructions: Vec<PinInstruction>,
    /// Percent of all interrupts per CPU; `null` when the capture has none.
    pub distribution: Vec<Option<f64>>,
    /// Sample standard deviation of `distribution`; `null` when undefined.
    pub stdev: Option<f64>,
}

/// Runs `strategy` over `records` and measures the balanced result.
pub fn build_report(
    strategy: BalanceStrategy,
    records: &[InterruptRecord],
) -> Result<BalanceReport, BalanceError> {
    let outcome = strategy.apply(records)?;
    let distribution = compute_distribution(&outcome.records);
    let stdev = compute_stdev(&distribution);

    debug!(
        strategy = strategy.name(),
        irqs = outcome.records.len(),
        instructions = outcome.instructions.len(),
        stdev = ?stdev,
        "built balance report"
    );

    Ok(BalanceReport {
        strategy,
        balanced_records: outcome.records,
        instructions: outcome.instructions,
        distribution,
        stdev,
    })
}

/// Builds a report for every strategy, most even distribution first.
///
/// Reports with an undefined stdev go last; equal values keep declaration
/// order.
pub fn compare_strategies(
    records: &[InterruptRecord],
) -> Result<Vec<BalanceReport>, BalanceError> {
    let mut reports = BalanceStrategy::ALL
        .into_iter()
        .map(|strategy| build_report(strategy, records))
        .collect::<Result<Vec<_>, _>>()?;

    reports.sort_by(|a, b| match (a.stdev, b.stdev) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{InterruptsCollector, MockFs};
    use crate::storage::model::Snapshot;

    fn collect(fs: MockFs) -> Snapshot {
        InterruptsCollector::new(fs, "/proc/interrupts")
            .collect()
            .unwrap()
    }

    #[test]
    fn test_identity_report_is_current_distribution() {
        let snapshot = collect(MockFs::typical_system());
        let report = build_report(BalanceStrategy::Identity, &snapshot.records).unwrap();

        assert_eq!(report.strategy, BalanceStrategy::Identity);
        assert!(report.instructions.is_empty());
        assert_eq!(report.distribution, compute_distribution(&snapshot.records));
        let sum: f64 = report.distribution.iter().flatten().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_report_measures_balanced_records() {
        let snapshot = collect(MockFs::typical_system());
        let current = build_report(BalanceStrategy::Identity, &snapshot.records).unwrap();
        let report =
            build_report(BalanceStrategy::ReverseSortedLeastUsed, &snapshot.records).unwrap();

        assert_eq!(report.instructions.len(), snapshot.records.len());
        assert_eq!(report.distribution, compute_distribution(&report.balanced_records));
        assert_eq!(report.distribution.len(), 4);
        let sum: f64 = report.distribution.iter().flatten().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(report.stdev.unwrap() < current.stdev.unwrap());
    }

    #[test]
    fn test_single_cpu_stdev_undefined() {
        let snapshot = collect(MockFs::single_cpu());
        let report = build_report(BalanceStrategy::LeastUsed, &snapshot.records).unwrap();

        assert_eq!(report.distribution, vec![Some(100.0)]);
        assert_eq!(report.stdev, None);
        assert_eq!(report.instructions.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(BalanceStrategy::Alternating, &[]).unwrap();
        assert!(report.balanced_records.is_empty());
        assert!(report.instructions.is_empty());
        assert!(report.distribution.is_empty());
        assert_eq!(report.stdev, None);
    }

    #[test]
    fn test_compare_strategies_ranked_by_stdev() {
        let snapshot = collect(MockFs::typical_system());
        let reports = compare_strategies(&snapshot.records).unwrap();

        assert_eq!(reports.len(), BalanceStrategy::ALL.len());
        let stdevs: Vec<f64> = reports.iter().map(|r| r.stdev.unwrap()).collect();
        assert!(stdevs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_compare_strategies_undefined_last() {
        let snapshot = collect(MockFs::single_cpu());
        let reports = compare_strategies(&snapshot.records).unwrap();
        let order: Vec<BalanceStrategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(order, BalanceStrategy::ALL.to_vec());
    }

    #[test]
    fn test_report_json_shape() {
        let records = vec![
            InterruptRecord::new("1", "IO-APIC", "i8042", vec![0, 0]),
            InterruptRecord::new("2", "IO-APIC", "cascade", vec![0, 0]),
        ];
        let report = build_report(BalanceStrategy::Alternating, &records).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["strategy"], "alternating");
        assert_eq!(json["instructions"][1], "pin IRQ 2 to CPU1");
        assert_eq!(json["distribution"], serde_json::json!([null, null]));
        assert!(json["stdev"].is_null());
    }
}
