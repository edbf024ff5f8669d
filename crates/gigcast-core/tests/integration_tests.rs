//! Integration tests for gigcast-core
//!
//! These tests exercise the full import -> forecast -> analyze -> advise
//! workflow over CSV fixtures.

use gigcast_core::{
    analyze_income_patterns, generate_financial_advice, import::parse_csv, predict_future_income,
    seasonal_index, Error, IncomeRecord, TrendDirection, PERIOD,
};

/// CSV with 6 flat months of freelance income, two payments per month
fn flat_income_csv() -> &'static str {
    "date,amount,source\n\
     2024-01-05,600,Uber\n\
     2024-01-20,400,Lyft\n\
     2024-02-05,700,Uber\n\
     2024-02-20,300,Lyft\n\
     2024-03-05,500,Uber\n\
     2024-03-20,500,Lyft\n\
     2024-04-05,650,Uber\n\
     2024-04-20,350,Lyft\n\
     2024-05-05,550,Uber\n\
     2024-05-20,450,Lyft\n\
     2024-06-05,600,Uber\n\
     2024-06-20,400,Lyft\n"
}

/// Two years of monthly income with December doubled both years
fn seasonal_records() -> Vec<IncomeRecord> {
    let mut records = Vec::new();
    for year in [2023, 2024] {
        for month in 1..=12u32 {
            let amount = if month == 12 { 2000.0 } else { 1000.0 };
            records.push(IncomeRecord::new(
                chrono::NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
                amount,
            ));
        }
    }
    records
}

#[test]
fn test_csv_to_forecast_workflow() {
    let records = parse_csv(flat_income_csv().as_bytes()).unwrap();
    assert_eq!(records.len(), 12);

    let predictions = predict_future_income(&records, 3).unwrap();
    assert_eq!(predictions.len(), 3);

    // Every month totals 1000, so the projection stays flat
    for p in &predictions {
        assert!((p.predicted_amount - 1000.0).abs() < 1.0);
        assert!(p.confidence > 0.0 && p.confidence <= 0.95);
    }

    // Forecast starts the month after June 2024
    assert_eq!((predictions[0].month, predictions[0].year), (7, 2024));
}

#[test]
fn test_forecast_fails_below_six_months_with_no_partial_output() {
    let csv = "date,amount\n2024-01-05,100\n2024-02-05,100\n2024-03-05,100\n";
    let records = parse_csv(csv.as_bytes()).unwrap();

    let result = predict_future_income(&records, 3);
    assert!(matches!(
        result,
        Err(Error::InsufficientData {
            required: 6,
            actual: 3
        })
    ));
}

#[test]
fn test_seasonal_factor_sum_invariant() {
    let records = seasonal_records();
    let series = gigcast_core::aggregate_monthly(&records);
    let table = seasonal_index(&series.totals);

    let sum: f64 = table.factors().iter().sum();
    assert!((sum - PERIOD as f64).abs() < 1e-9);
}

#[test]
fn test_seasonal_history_shapes_forecast_and_analysis() {
    let records = seasonal_records();

    let analysis = analyze_income_patterns(&records).unwrap();
    assert!(analysis.seasonality);
    assert!(analysis.peak_months.contains(&12));

    // December 2024 is the last observed month; forecast into 2025 and the
    // next December should carry the elevated factor
    let predictions = predict_future_income(&records, 12).unwrap();
    let december = predictions
        .iter()
        .find(|p| p.month == 12 && p.year == 2025)
        .unwrap();
    let november = predictions
        .iter()
        .find(|p| p.month == 11 && p.year == 2025)
        .unwrap();
    assert!(december.predicted_amount > november.predicted_amount);
}

#[test]
fn test_idempotence_across_all_entry_points() {
    let records = parse_csv(flat_income_csv().as_bytes()).unwrap();

    let p1 = predict_future_income(&records, 3).unwrap();
    let p2 = predict_future_income(&records, 3).unwrap();
    assert_eq!(p1, p2);

    let a1 = analyze_income_patterns(&records).unwrap();
    let a2 = analyze_income_patterns(&records).unwrap();
    assert_eq!(a1, a2);

    let advice1 = generate_financial_advice(&records, &p1);
    let advice2 = generate_financial_advice(&records, &p2);
    assert_eq!(advice1, advice2);
}

#[test]
fn test_advice_recovers_from_analyzer_error() {
    let csv = "date,amount\n2024-01-05,100\n";
    let records = parse_csv(csv.as_bytes()).unwrap();

    // analyze fails outright...
    assert!(analyze_income_patterns(&records).is_err());

    // ...but advice swallows it into the fallback message
    let advice = generate_financial_advice(&records, &[]);
    assert!(advice.contains("more income data"));
}

#[test]
fn test_stable_flat_history_full_narrative() {
    let records = parse_csv(flat_income_csv().as_bytes()).unwrap();

    let analysis = analyze_income_patterns(&records).unwrap();
    assert_eq!(analysis.trend, TrendDirection::Stable);

    let predictions = predict_future_income(&records, 3).unwrap();
    let advice = generate_financial_advice(&records, &predictions);

    assert!(advice.contains("relatively stable"));
    assert!(advice.contains("emergency fund"));
    // Flat predictions stay within 10% of the latest month, so no
    // prediction fragment appears
    assert!(!advice.contains("coming months"));
}

#[test]
fn test_predictions_serialize_round_trip() {
    let records = parse_csv(flat_income_csv().as_bytes()).unwrap();
    let predictions = predict_future_income(&records, 2).unwrap();

    let json = serde_json::to_string(&predictions).unwrap();
    let back: Vec<gigcast_core::Prediction> = serde_json::from_str(&json).unwrap();
    assert_eq!(predictions, back);
}
