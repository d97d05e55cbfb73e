//! Usage aggregator: process-wide running sums over processed records
//!
//! The only shared mutable state in the crate. Multiple concurrent producers
//! may call [`UsageAggregator::record`]; a mutex serializes the
//! count-and-sum update so concurrent increments cannot lose updates.

use crate::types::{RecordStats, UsageReport};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
struct Totals {
    record_count: u64,
    agreement_ratio_sum: f64,
    vocabulary_size_sum: u64,
    total_token_count_sum: u64,
    repetition_coefficient_sum: f64,
    elapsed_sum: Duration,
}

/// Accumulates per-record statistics into a process-wide running report.
#[derive(Debug, Default)]
pub struct UsageAggregator {
    totals: Mutex<Totals>,
}

impl UsageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record's values into the running sums.
    pub fn record(&self, stats: &RecordStats, elapsed: Duration) {
        let mut totals = self.totals.lock().unwrap();
        totals.record_count += 1;
        totals.agreement_ratio_sum += stats.agreement_ratio;
        totals.vocabulary_size_sum += stats.vocabulary_size as u64;
        totals.total_token_count_sum += stats.total_token_count;
        totals.repetition_coefficient_sum += stats.repetition_coefficient;
        totals.elapsed_sum += elapsed;
    }

    /// Snapshot the running averages.
    ///
    /// Returns `None` when no records have been processed, never dividing
    /// by zero.
    pub fn report(&self) -> Option<UsageReport> {
        let totals = self.totals.lock().unwrap();
        if totals.record_count == 0 {
            return None;
        }
        let count = totals.record_count as f64;
        Some(UsageReport {
            record_count: totals.record_count,
            average_agreement_ratio: totals.agreement_ratio_sum / count,
            average_vocabulary_size: totals.vocabulary_size_sum as f64 / count,
            average_total_token_count: totals.total_token_count_sum as f64 / count,
            average_repetition_coefficient: totals.repetition_coefficient_sum / count,
            average_elapsed_time_ms: totals.elapsed_sum.as_secs_f64() * 1000.0 / count,
        })
    }

    /// Zero all accumulators. Idempotent; safe without a prior `report()`.
    pub fn reset(&self) {
        let mut totals = self.totals.lock().unwrap();
        *totals = Totals::default();
    }
}
