//! Current-period budget summary and threshold-crossing notification
//! decision.
//!
//! The service only reports: it computes how much of the budget was used and
//! whether a notification should fire, it never enforces the budget or
//! schedules anything. Records must already be filtered to the current
//! period; this module composes the period calculator and the aggregator
//! over what it is given.

use chrono::NaiveDateTime;
use model::expense::ExpenseRecord;
use model::settings::BudgetSettings;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::aggregate::{AggregationResult, aggregate};
use crate::error::{EngineError, Result};
use crate::period::{Period, current_period};

/// Summary of the current budgeting period for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub period: Period,
    pub monthly_budget: Decimal,
    pub currency_code: String,
    pub total_spent: Decimal,
    /// Budget minus spend. Negative means overspend; that is valid output.
    pub remaining: Decimal,
    /// Spend as a percentage of the budget, rounded to 2 decimal places.
    /// Zero when the budget is zero.
    pub percent_used: Decimal,
    pub should_notify: bool,
    /// Human-readable message, present only when `should_notify` is true.
    pub notification_message: Option<String>,
    /// Full per-category breakdown and statistics for the period.
    pub breakdown: AggregationResult,
}

/// Rejects settings the engine cannot compute on. The HTTP layer validates
/// request shapes; this guards the library boundary itself.
pub(crate) fn validate_settings(settings: &BudgetSettings) -> Result<()> {
    if !(1..=31).contains(&settings.anchor_day) {
        return Err(EngineError::InvalidInput(format!(
            "anchor_day must be between 1 and 31, got {}",
            settings.anchor_day
        )));
    }
    if settings.monthly_budget < Decimal::ZERO {
        return Err(EngineError::InvalidInput(format!(
            "monthly_budget must be non-negative, got {}",
            settings.monthly_budget
        )));
    }
    Ok(())
}

/// Maps an absent settings record to the "not configured" error the calling
/// layer reports as not found.
pub fn require_settings(
    user_id: &str,
    settings: Option<BudgetSettings>,
) -> Result<BudgetSettings> {
    settings.ok_or_else(|| EngineError::MissingSettings {
        user_id: user_id.to_string(),
    })
}

/// Spend as a percentage of the budget, rounded to 2 decimal places, with an
/// explicit zero-budget guard so no path divides by zero.
pub(crate) fn percent_used(monthly_budget: Decimal, total_spent: Decimal) -> Decimal {
    if monthly_budget > Decimal::ZERO {
        (total_spent / monthly_budget * Decimal::ONE_HUNDRED).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

/// Summarizes the current budgeting period for one user.
///
/// `period_records` must already be filtered to the period containing
/// `reference` (the storage collaborator queries by the period bounds); the
/// reference instant is passed explicitly rather than read from the wall
/// clock so the computation is deterministic.
#[instrument(
    skip(settings, period_records),
    fields(user_id = %settings.user_id, num_records = period_records.len())
)]
pub fn summarize(
    settings: &BudgetSettings,
    reference: NaiveDateTime,
    period_records: &[ExpenseRecord],
) -> Result<BudgetSummary> {
    validate_settings(settings)?;

    let period = current_period(settings.anchor_day, reference);
    let breakdown = aggregate(period_records);

    let total_spent = breakdown.total_amount;
    let remaining = settings.monthly_budget - total_spent;
    let percent_used = percent_used(settings.monthly_budget, total_spent);

    let should_notify =
        settings.notification_enabled && percent_used >= settings.notification_threshold_percent;
    let notification_message = should_notify.then(|| {
        debug!(%percent_used, threshold = %settings.notification_threshold_percent,
            "budget notification threshold crossed");
        format!(
            "You have used {}% of your monthly budget",
            percent_used.round_dp(1)
        )
    });

    Ok(BudgetSummary {
        period,
        monthly_budget: settings.monthly_budget,
        currency_code: settings.currency_code.clone(),
        total_spent,
        remaining,
        percent_used,
        should_notify,
        notification_message,
        breakdown,
    })
}
