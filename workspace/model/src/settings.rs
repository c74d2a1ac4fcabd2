use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-user budget configuration. Exactly one record exists per user.
///
/// The `anchor_day` marks the day of the month on which the user's budgeting
/// period begins; period boundaries are always recomputed from it, so changing
/// it reshapes every past and future period (no migration of historical
/// boundaries is performed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Opaque user identifier, unique key.
    pub user_id: String,
    /// Non-negative budget amount per period.
    pub monthly_budget: Decimal,
    /// ISO 4217 currency code (format only, never exchange-rate-aware).
    pub currency_code: String,
    /// Day of month (1-31) on which a budgeting period begins.
    pub anchor_day: u32,
    pub notification_enabled: bool,
    /// Percentage of the budget (0-100) at which a notification fires.
    pub notification_threshold_percent: Decimal,
    /// Category names in insertion order. Duplicates are the caller's concern.
    pub categories: Vec<String>,
}

impl BudgetSettings {
    /// Creates settings with notifications disabled and no categories.
    pub fn new(
        user_id: impl Into<String>,
        monthly_budget: Decimal,
        currency_code: impl Into<String>,
        anchor_day: u32,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            monthly_budget,
            currency_code: currency_code.into(),
            anchor_day,
            notification_enabled: false,
            notification_threshold_percent: Decimal::ZERO,
            categories: Vec::new(),
        }
    }

    /// Enables notifications at the given threshold percentage.
    pub fn with_notification(mut self, threshold_percent: Decimal) -> Self {
        self.notification_enabled = true;
        self.notification_threshold_percent = threshold_percent;
        self
    }

    /// Sets the category list, preserving the given order.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Checks the currency code format (ISO 4217: 3 uppercase ASCII letters).
    /// Format only; exchange rates are out of scope.
    pub fn has_valid_currency_code(&self) -> bool {
        self.currency_code.len() == 3
            && self.currency_code.chars().all(|c| c.is_ascii_uppercase())
    }
}
