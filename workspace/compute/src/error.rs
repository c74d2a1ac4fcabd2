use chrono::NaiveDateTime;
use thiserror::Error;

/// Error type returned by the storage collaborator behind [`crate::history::ExpenseLookup`].
/// The engine never inspects it; it is carried through unchanged.
pub type LookupError = Box<dyn std::error::Error + Send + Sync>;

/// Error types for the budget engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input rejected before any computation (anchor day out of range,
    /// negative budget, zero months back).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Summary or history requested for a user without budget settings.
    /// A "not configured" condition, not a system fault.
    #[error("No budget settings configured for user `{user_id}`")]
    MissingSettings { user_id: String },

    /// The expense lookup collaborator failed. The engine performs no retry
    /// and discards any periods aggregated so far; partial results are never
    /// returned alongside successful ones.
    #[error("Expense lookup failed for period starting {period_start}: {source}")]
    Lookup {
        period_start: NaiveDateTime,
        #[source]
        source: LookupError,
    },
}

/// Type alias for Result with EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
