//! JSON response shapes for the HTTP layer.
//!
//! Field names, decimal-string amounts, and ISO-8601 instants (millisecond
//! precision) are part of the client contract and must stay stable.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use compute::{AggregationResult, BudgetSummary, CategoryTotal, Period, PeriodSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ISO-8601 with milliseconds, e.g. `2024-03-14T23:59:59.999`.
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

fn format_instant(instant: NaiveDateTime) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

/// One budgeting period, inclusive on both ends.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PeriodDto {
    /// Period start (ISO-8601, inclusive)
    pub start: String,
    /// Period end (ISO-8601, inclusive, last millisecond of the day)
    pub end: String,
}

impl From<Period> for PeriodDto {
    fn from(period: Period) -> Self {
        Self {
            start: format_instant(period.start),
            end: format_instant(period.end),
        }
    }
}

/// Subtotal and count for one expense category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryTotalDto {
    /// Sum of amounts in this category
    pub total_amount: Decimal,
    /// Number of records in this category
    pub count: u64,
}

impl From<CategoryTotal> for CategoryTotalDto {
    fn from(total: CategoryTotal) -> Self {
        Self {
            total_amount: total.total_amount,
            count: total.count,
        }
    }
}

/// Aggregated totals and statistics for a set of expenses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AggregationDto {
    /// Sum over all records
    pub total_amount: Decimal,
    /// Number of records
    pub count: u64,
    /// Per-category subtotals, keyed by category name
    pub per_category: HashMap<String, CategoryTotalDto>,
    /// Smallest single amount (0 when empty)
    pub min: Decimal,
    /// Largest single amount (0 when empty)
    pub max: Decimal,
    /// Mean amount (0 when empty)
    pub average: Decimal,
}

impl From<AggregationResult> for AggregationDto {
    fn from(result: AggregationResult) -> Self {
        Self {
            total_amount: result.total_amount,
            count: result.count,
            per_category: result
                .per_category
                .into_iter()
                .map(|(name, total)| (name, total.into()))
                .collect(),
            min: result.min,
            max: result.max,
            average: result.average,
        }
    }
}

/// Current-period budget summary response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummaryResponse {
    pub period: PeriodDto,
    /// Configured budget for one period
    pub monthly_budget: Decimal,
    /// ISO 4217 currency code
    pub currency_code: String,
    /// Total spent inside the period
    pub total_spent: Decimal,
    /// Budget minus spend; negative signals overspend
    pub remaining: Decimal,
    /// Spend as percentage of budget, 2 decimal places
    pub percent_used: Decimal,
    /// Whether the notification threshold was crossed
    pub should_notify: bool,
    /// Notification text, only present when `should_notify` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_message: Option<String>,
    /// Per-category breakdown and statistics
    pub breakdown: AggregationDto,
}

impl From<BudgetSummary> for SummaryResponse {
    fn from(summary: BudgetSummary) -> Self {
        Self {
            period: summary.period.into(),
            monthly_budget: summary.monthly_budget,
            currency_code: summary.currency_code,
            total_spent: summary.total_spent,
            remaining: summary.remaining,
            percent_used: summary.percent_used,
            should_notify: summary.should_notify,
            notification_message: summary.notification_message,
            breakdown: summary.breakdown.into(),
        }
    }
}

/// One entry of the budget history response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PeriodSummaryResponse {
    pub period: PeriodDto,
    /// Current budget, applied retroactively (settings are not versioned)
    pub monthly_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub expenses_count: u64,
}

impl From<PeriodSummary> for PeriodSummaryResponse {
    fn from(summary: PeriodSummary) -> Self {
        Self {
            period: summary.period.into(),
            monthly_budget: summary.monthly_budget,
            total_spent: summary.total_spent,
            remaining: summary.remaining,
            expenses_count: summary.expenses_count,
        }
    }
}
