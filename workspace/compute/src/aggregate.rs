//! Expense aggregation over a pre-filtered set of records.
//!
//! The aggregator is a pure function: the caller supplies exactly the records
//! it wants aggregated (already filtered to one user and one period), and the
//! result depends only on their multiset, never on their order. No storage is
//! queried here.

use std::collections::HashMap;

use model::expense::ExpenseRecord;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Bucket used for records with a missing or blank category.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Running total and record count for one category bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotal {
    pub total_amount: Decimal,
    pub count: u64,
}

/// Totals, per-category breakdown, and summary statistics over a set of
/// expense records. All fields are zero (and the map empty) for empty input;
/// `average`, `min`, and `max` never produce a division by zero or NaN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    pub total_amount: Decimal,
    pub count: u64,
    pub per_category: HashMap<String, CategoryTotal>,
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

/// Resolves the bucket a record falls into. Unknown categories are kept
/// as-is; whether they belong to the user's configured list is a write-path
/// concern, not this engine's.
fn bucket_name(category: Option<&str>) -> &str {
    match category {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_CATEGORY,
    }
}

/// Aggregates the given expense records into totals, per-category subtotals,
/// and summary statistics.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn aggregate(records: &[ExpenseRecord]) -> AggregationResult {
    let Some(first) = records.first() else {
        return AggregationResult::default();
    };

    let mut total_amount = Decimal::ZERO;
    let mut min = first.amount;
    let mut max = first.amount;
    let mut per_category: HashMap<String, CategoryTotal> = HashMap::new();

    for record in records {
        total_amount += record.amount;
        min = min.min(record.amount);
        max = max.max(record.amount);

        let bucket = per_category
            .entry(bucket_name(record.category.as_deref()).to_string())
            .or_default();
        bucket.total_amount += record.amount;
        bucket.count += 1;
    }

    let count = records.len() as u64;
    let average = total_amount / Decimal::from(count);

    debug!(%total_amount, count, "aggregated expense records");

    AggregationResult {
        total_amount,
        count,
        per_category,
        min,
        max,
        average,
    }
}
