//! End-to-end scenarios through the library facade: period resolution,
//! summary with notification decision, and multi-month history against an
//! in-memory expense store.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use spendtrack::schemas::{PeriodSummaryResponse, SummaryResponse};
use spendtrack::{
    BudgetSettings, EngineError, ExpenseLookup, ExpenseRecord, LookupError, Period, current_period,
    history, require_settings, summarize,
};

fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn settings() -> BudgetSettings {
    BudgetSettings::new("user-1", Decimal::from(1000), "EUR", 15)
        .with_notification(Decimal::from(80))
        .with_categories(vec!["Groceries".to_string(), "Transport".to_string()])
}

struct InMemoryStore {
    records: Vec<ExpenseRecord>,
}

#[async_trait]
impl ExpenseLookup for InMemoryStore {
    async fn expenses_in(&self, period: &Period) -> Result<Vec<ExpenseRecord>, LookupError> {
        Ok(self
            .records
            .iter()
            .filter(|record| period.contains(record.date))
            .cloned()
            .collect())
    }
}

#[test]
fn current_period_before_and_after_anchor() {
    init_tracing_for_tests();

    // Reference day 10 < anchor 15: the period began the previous month
    let period = current_period(15, at(2024, 3, 10, 9));
    assert_eq!(period.start, at(2024, 2, 15, 0));
    assert_eq!(
        period.end,
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
    );

    // Reference day 20 >= anchor 15: the period began this month
    let period = current_period(15, at(2024, 3, 20, 9));
    assert_eq!(period.start, at(2024, 3, 15, 0));
    assert_eq!(
        period.end,
        NaiveDate::from_ymd_opt(2024, 4, 14)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
    );
}

#[test]
fn summary_crosses_notification_threshold() {
    init_tracing_for_tests();

    let records = vec![
        ExpenseRecord::new_with_category(
            "user-1",
            Decimal::from(500),
            at(2024, 3, 16, 12),
            "Groceries",
        ),
        ExpenseRecord::new_with_category(
            "user-1",
            Decimal::from(350),
            at(2024, 3, 18, 19),
            "Transport",
        ),
    ];

    let summary = summarize(&settings(), at(2024, 3, 20, 9), &records).unwrap();

    assert_eq!(summary.percent_used, Decimal::new(8500, 2));
    assert_eq!(summary.remaining, Decimal::from(150));
    assert!(summary.should_notify);

    let response = SummaryResponse::from(summary);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["percent_used"], "85.00");
    assert_eq!(json["total_spent"], "850");
}

#[test]
fn missing_settings_is_a_not_configured_condition() {
    let err = require_settings("nobody", None).unwrap_err();
    assert!(matches!(err, EngineError::MissingSettings { .. }));
    assert!(err.to_string().contains("nobody"));
}

#[tokio::test]
async fn history_walks_three_periods_back() {
    init_tracing_for_tests();

    let store = InMemoryStore {
        records: vec![
            ExpenseRecord::new("user-1", Decimal::from(120), at(2024, 3, 16, 10)),
            ExpenseRecord::new("user-1", Decimal::from(80), at(2024, 2, 28, 10)),
            ExpenseRecord::new("user-1", Decimal::from(60), at(2024, 1, 20, 10)),
        ],
    };

    let summaries = history(&settings(), at(2024, 3, 20, 9), 3, &store)
        .await
        .unwrap();

    assert_eq!(summaries.len(), 3);
    // Most recent first, each period containing its own records
    assert_eq!(summaries[0].total_spent, Decimal::from(120));
    assert_eq!(summaries[1].total_spent, Decimal::from(80));
    assert_eq!(summaries[2].total_spent, Decimal::from(60));
    for summary in &summaries {
        assert_eq!(
            summary.remaining,
            summary.monthly_budget - summary.total_spent
        );
    }

    let responses: Vec<PeriodSummaryResponse> =
        summaries.into_iter().map(Into::into).collect();
    assert_eq!(responses[0].period.start, "2024-03-15T00:00:00.000");
    assert_eq!(responses[2].period.start, "2024-01-15T00:00:00.000");
}

#[tokio::test]
async fn history_surfaces_lookup_failures_unchanged() {
    struct BrokenStore;

    #[async_trait]
    impl ExpenseLookup for BrokenStore {
        async fn expenses_in(&self, _period: &Period) -> Result<Vec<ExpenseRecord>, LookupError> {
            Err("connection refused".into())
        }
    }

    let err = history(&settings(), at(2024, 3, 20, 9), 2, &BrokenStore)
        .await
        .unwrap_err();

    match err {
        EngineError::Lookup { source, .. } => {
            assert_eq!(source.to_string(), "connection refused");
        }
        other => panic!("expected Lookup error, got {other:?}"),
    }
}
