//! Behavior-driven tests for the quote → premium → history → trend
//! pipeline, focusing on end-of-run outcomes a scheduler operator
//! would observe.

use aurum_core::{
    analyze, compute_premium, ManualSource, PremiumRecord, Quote, QuoteSource, RunSummary,
    SourceErrorKind, SourceId, TradeDate, TrendDirection, TrendLevel,
};
use aurum_store::HistoryStore;
use tempfile::tempdir;

fn date(value: &str) -> TradeDate {
    TradeDate::parse(value).expect("test date")
}

// =============================================================================
// Premium computation
// =============================================================================

#[test]
fn when_domestic_gold_trades_below_fair_value_the_premium_is_negative() {
    // Given: KRX gold at 76,000 KRW/g, COMEX at $2,400/oz, 1,350 KRW/$
    let quote = Quote::gold(76_000.0, 2_400.0, 1_350.0).expect("valid quote");

    // When: The premium is computed
    let premium = compute_premium(&quote).expect("computable");

    // Then: Fair value is 2400*1350/31.1035 and the premium is ~-27.04%
    assert!((premium.fair_value_domestic - 104_168.34).abs() < 0.01);
    assert!((premium.premium_pct - (-27.041_172_839_5)).abs() < 1e-6);
}

#[test]
fn when_a_source_yields_a_non_positive_value_the_run_fails_before_the_store() {
    let source = ManualSource::new(76_000.0, -2_400.0, 1_350.0, 31.1035);

    let err = source.fetch().expect_err("must fail");

    assert_eq!(err.kind(), SourceErrorKind::InvalidQuote);
    assert!(!err.retryable());
}

// =============================================================================
// Full run: upsert + persist + analyze
// =============================================================================

#[test]
fn when_the_same_day_runs_twice_the_store_keeps_one_record_with_the_latest_value() {
    // Given: A persisted history with two prior days
    let temp = tempdir().expect("tempdir");
    let store = HistoryStore::open(temp.path().join("history.json"));
    let mut history = store.load();
    history.upsert(PremiumRecord::new("2024-01-01", 1.0));
    history.upsert(PremiumRecord::new("2024-01-02", 2.0));
    store.persist(&history).expect("persist");

    // When: Today runs twice with different computed premiums
    for premium in [2.8, 3.0] {
        let mut history = store.load();
        history.upsert(PremiumRecord::new("2024-01-03", premium));
        store.persist(&history).expect("persist");
    }

    // Then: Exactly one record for today, holding the latest value
    let stored = store.load();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.records()[2], PremiumRecord::new("2024-01-03", 3.0));
}

#[test]
fn when_the_trend_is_analyzed_the_just_written_record_does_not_shift_the_baseline() {
    // Given: Two prior days persisted and today's record already upserted
    let temp = tempdir().expect("tempdir");
    let store = HistoryStore::open(temp.path().join("history.json"));
    let mut history = store.load();
    history.upsert(PremiumRecord::new("2024-01-01", 1.0));
    history.upsert(PremiumRecord::new("2024-01-02", 2.0));
    history.upsert(PremiumRecord::new("2024-01-03", 3.0));
    store.persist(&history).expect("persist");

    // When: Today's premium of 3.0 is analyzed against the stored history
    let result = analyze(store.load().records(), 3.0, date("2024-01-03"));

    // Then: The window covers only the prior days
    assert_eq!(result.window_average, 1.5);
    assert_eq!(result.level, TrendLevel::Overvalued);
    assert_eq!(result.change_vs_previous, 1.0);
    assert_eq!(result.trend_direction, TrendDirection::Up);
}

#[test]
fn when_aurum_runs_for_the_first_time_ever_the_change_is_zero_and_flat() {
    let history = vec![PremiumRecord::new("2024-01-03", 3.0)];

    let result = analyze(&history, 3.0, date("2024-01-03"));

    assert_eq!(result.change_vs_previous, 0.0);
    assert_eq!(result.trend_direction, TrendDirection::Flat);
    assert_eq!(result.level, TrendLevel::Undervalued);
}

#[test]
fn when_the_premium_equals_the_window_average_it_classifies_as_undervalued() {
    let history = vec![
        PremiumRecord::new("2024-01-01", 2.0),
        PremiumRecord::new("2024-01-02", 2.0),
    ];

    let result = analyze(&history, 2.0, date("2024-01-03"));

    assert_eq!(result.level, TrendLevel::Undervalued);
}

// =============================================================================
// Summary contract
// =============================================================================

#[test]
fn when_a_run_completes_the_summary_exposes_every_collaborator_field() {
    let today = date("2024-01-03");
    let quote = Quote::gold(76_000.0, 2_400.0, 1_350.0).expect("quote");
    let premium = compute_premium(&quote).expect("premium");
    let history = vec![
        PremiumRecord::new("2024-01-01", -26.0),
        PremiumRecord::new("2024-01-02", -26.5),
    ];
    let trend = analyze(&history, premium.premium_pct, today);

    let summary = RunSummary::new(today, SourceId::Manual, &quote, &premium, &trend);
    let json = serde_json::to_value(summary).expect("serialize");

    for field in [
        "date",
        "source",
        "domestic_price",
        "reference_price_foreign",
        "fx_rate",
        "fair_value_domestic",
        "premium_pct",
        "change_vs_previous",
        "window_average",
        "level",
        "trend_direction",
    ] {
        assert!(json.get(field).is_some(), "summary must expose '{field}'");
    }

    assert_eq!(json["date"], "2024-01-03");
    assert_eq!(json["trend_direction"], "down");
}
