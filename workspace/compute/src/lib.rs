//! The spendtrack computation engine: anchored budget periods, expense
//! aggregation, and the summary/history services composed from them.
//!
//! Every entry point is a pure function of its inputs (the reference instant
//! included); the only suspension point is the [`history::ExpenseLookup`]
//! collaborator that fetches records per period. Components may run
//! concurrently for different users without coordination.

pub mod aggregate;
pub mod error;
pub mod history;
pub mod period;
pub mod summary;

pub use aggregate::{AggregationResult, CategoryTotal, DEFAULT_CATEGORY, aggregate};
pub use error::{EngineError, LookupError, Result};
pub use history::{ExpenseLookup, PeriodSummary, history};
pub use period::{Period, current_period, periods_before};
pub use summary::{BudgetSummary, require_settings, summarize};
