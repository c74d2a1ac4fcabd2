use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single expense record owned by a user.
///
/// The `category` is expected to be one of the user's configured categories,
/// but this is not enforced on the read path: the aggregation layer buckets
/// unknown categories as-is, and a missing category falls into the default
/// bucket. Write-path validation belongs to the CRUD layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub user_id: String,
    /// Non-negative amount in the user's currency.
    pub amount: Decimal,
    /// Instant the expense occurred.
    pub date: NaiveDateTime,
    pub category: Option<String>,
}

impl ExpenseRecord {
    /// Creates an uncategorized expense record.
    pub fn new(user_id: impl Into<String>, amount: Decimal, date: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            date,
            category: None,
        }
    }

    /// Creates an expense record with a category.
    pub fn new_with_category(
        user_id: impl Into<String>,
        amount: Decimal,
        date: NaiveDateTime,
        category: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            amount,
            date,
            category: Some(category.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_is_uncategorized() {
        let record = ExpenseRecord::new("user-1", Decimal::new(1050, 2), noon(2024, 3, 1));

        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.amount, Decimal::new(1050, 2)); // 10.50
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_new_with_category() {
        let record = ExpenseRecord::new_with_category(
            "user-1",
            Decimal::from(42),
            noon(2024, 3, 1),
            "Groceries",
        );

        assert_eq!(record.category.as_deref(), Some("Groceries"));
    }
}
