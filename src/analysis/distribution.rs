//! Per-CPU interrupt share and its spread.
//!
//! Undefined values are `None`, never a stand-in number: a capture with zero
//! interrupts has no meaningful share per CPU, and a spread over fewer than
//! two CPUs does not exist.

use crate::storage::model::InterruptRecord;

/// Sums interrupt counts per CPU across `records`.
///
/// The width is taken from the first record; an empty input yields an empty
/// vector.
pub fn cpu_totals(records: &[InterruptRecord]) -> Vec<u64> {
    let width = records.first().map_or(0, InterruptRecord::cpu_count);
    let mut totals = vec![0u64; width];

    for record in records {
        for (sum, count) in totals.iter_mut().zip(record.per_cpu()) {
            *sum = sum.saturating_add(*count);
        }
    }

    totals
}

/// Percentage of all interrupts handled by each CPU.
///
/// Every entry is `None` when the records carry no interrupts at all.
pub fn compute_distribution(records: &[InterruptRecord]) -> Vec<Option<f64>> {
    let totals = cpu_totals(records);
    let grand_total = totals.iter().fold(0u64, |acc, &t| acc.saturating_add(t));

    if grand_total == 0 {
        return vec![None; totals.len()];
    }

    totals
        .iter()
        .map(|&t| Some(t as f64 / grand_total as f64 * 100.0))
        .collect()
}

/// Sample standard deviation of a distribution.
///
/// Returns `None` for fewer than two entries or when any share is undefined.
pub fn compute_stdev(distribution: &[Option<f64>]) -> Option<f64> {
    if distribution.len() < 2 {
        return None;
    }
    let values: Vec<f64> = distribution.iter().copied().collect::<Option<_>>()?;

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Some(variance.sqrt())
}
