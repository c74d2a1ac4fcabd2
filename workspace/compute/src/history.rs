//! Past-period budget history.
//!
//! Walks backward month by month from the current period and aggregates the
//! expenses of each period through the storage collaborator. The collaborator
//! is the only suspension point in the engine; lookups are awaited
//! sequentially so a failure aborts the whole call before any partial result
//! can leak out.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use model::expense::ExpenseRecord;
use model::settings::BudgetSettings;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::aggregate::aggregate;
use crate::error::{EngineError, LookupError, Result};
use crate::period::{Period, periods_before};
use crate::summary::validate_settings;

/// Storage collaborator seam. An implementation is scoped to one user and
/// must return exactly the records whose `date` lies within
/// `[period.start, period.end]`, both ends inclusive. Retry policy, if any,
/// lives behind this trait; the engine calls each lookup once.
#[async_trait]
pub trait ExpenseLookup: Send + Sync {
    async fn expenses_in(
        &self,
        period: &Period,
    ) -> std::result::Result<Vec<ExpenseRecord>, LookupError>;
}

/// Spend and remaining budget for one past period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub period: Period,
    /// The user's current budget. Settings are not versioned, so this is
    /// applied retroactively to past periods as well. Known limitation.
    pub monthly_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub expenses_count: u64,
}

/// Produces one summary per period for the `months_back` periods up to and
/// including the current one, ordered most-recent first.
///
/// Lookups are awaited one period at a time; the first failure is returned
/// carrying the period it happened in, and summaries computed so far are
/// discarded.
#[instrument(skip(settings, lookup), fields(user_id = %settings.user_id))]
pub async fn history(
    settings: &BudgetSettings,
    reference: NaiveDateTime,
    months_back: usize,
    lookup: &dyn ExpenseLookup,
) -> Result<Vec<PeriodSummary>> {
    validate_settings(settings)?;
    if months_back == 0 {
        return Err(EngineError::InvalidInput(
            "months_back must be at least 1".to_string(),
        ));
    }

    let periods = periods_before(settings.anchor_day, reference, months_back);
    let mut summaries = Vec::with_capacity(periods.len());

    for period in periods {
        let records = lookup
            .expenses_in(&period)
            .await
            .map_err(|source| EngineError::Lookup {
                period_start: period.start,
                source,
            })?;
        let result = aggregate(&records);

        debug!(start = %period.start, total = %result.total_amount, "aggregated period");

        summaries.push(PeriodSummary {
            period,
            monthly_budget: settings.monthly_budget,
            total_spent: result.total_amount,
            remaining: settings.monthly_budget - result.total_amount,
            expenses_count: result.count,
        });
    }

    Ok(summaries)
}
