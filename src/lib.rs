//! spendtrack tracks personal spending against a recurring monthly budget.
//!
//! This crate is the library surface the HTTP layer consumes: budgeting
//! periods anchored to a user-chosen day of month, expense aggregation
//! within them, current-period summaries with threshold-crossing
//! notification decisions, and past-period history. Storage, auth, and
//! routing live in the consuming service; the engine reaches storage only
//! through the [`ExpenseLookup`] trait and otherwise computes purely over
//! the data it is handed.

pub mod schemas;

pub use compute::{
    AggregationResult, BudgetSummary, CategoryTotal, DEFAULT_CATEGORY, EngineError, ExpenseLookup,
    LookupError, Period, PeriodSummary, Result, aggregate, current_period, history,
    periods_before, require_settings, summarize,
};
pub use model::expense::ExpenseRecord;
pub use model::init_tracing;
pub use model::settings::BudgetSettings;
