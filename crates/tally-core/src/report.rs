//! # Report Module
//!
//! Folds validation outcomes into the final, immutable [`SalesReport`].
//!
//! The accumulator is an explicit value that is threaded through the fold,
//! never module state, so a run is reentrant and two runs can never observe
//! each other. Costs and counts are associative; the error list is not
//! reorderable, so [`ReportBuilder::merge`] restores ascending record index
//! order when combining independently folded chunks.

use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::money::Money;
use crate::types::{RejectedRecord, SaleRecord, ValidationOutcome};
use crate::validation::validate_record;

// =============================================================================
// Report Builder
// =============================================================================

/// Accumulator state for one computation run: running total, valid count,
/// and the ordered rejection list.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    total: Money,
    valid: usize,
    errors: Vec<RejectedRecord>,
}

impl ReportBuilder {
    /// Fresh, empty accumulator.
    pub fn new() -> Self {
        ReportBuilder::default()
    }

    /// Folds one validation outcome into the accumulator.
    ///
    /// `Priced` outcomes add to the total and the valid count; `Rejected`
    /// outcomes append to the error list. Records fed in input order come
    /// back out in input order.
    pub fn fold(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Priced { contribution } => {
                self.total += contribution;
                self.valid += 1;
            }
            ValidationOutcome::Rejected(rejected) => self.errors.push(rejected),
        }
    }

    /// Combines two accumulators built from index-labeled chunks.
    ///
    /// Deterministic regardless of chunk completion order: costs and counts
    /// sum, error lists concatenate and are restored to ascending record
    /// index order.
    pub fn merge(mut self, other: ReportBuilder) -> ReportBuilder {
        self.total += other.total;
        self.valid += other.valid;
        self.errors.extend(other.errors);
        self.errors.sort_by_key(|rejected| rejected.index);
        self
    }

    /// Finalizes the run: rounds the total to two fractional digits, half
    /// up, exactly once.
    pub fn finish(self) -> SalesReport {
        SalesReport {
            records_processed: self.valid + self.errors.len(),
            valid_records: self.valid,
            total_cost: self.total.round_2(),
            errors: self.errors,
        }
    }
}

// =============================================================================
// Sales Report
// =============================================================================

/// The finalized, immutable result of one computation run.
///
/// Holds `records_processed == valid_records + errors.len()` by
/// construction; `errors` is ordered by ascending original record index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    /// Every record that was fed through validation.
    pub records_processed: usize,

    /// Records that passed all rules and contributed to the total.
    pub valid_records: usize,

    /// Sum of contributions of valid records, rounded to two digits.
    pub total_cost: Money,

    /// Rejected records, in original input order.
    pub errors: Vec<RejectedRecord>,
}

impl SalesReport {
    /// True when every record passed validation.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Runs the whole engine: validates each record in input order and folds
/// the outcomes into a finalized report.
pub fn compute_report(catalogue: &Catalogue, records: &[SaleRecord]) -> SalesReport {
    let mut builder = ReportBuilder::new();
    for record in records {
        builder.fold(validate_record(record, catalogue));
    }
    builder.finish()
}

// =============================================================================
// Unit Tests
// =============================================================================
