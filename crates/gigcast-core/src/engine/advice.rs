//! Financial advice narrative assembly
//!
//! Pure text composition over the pattern analysis and predictions: each
//! rule contributes one sentence fragment, and the fragments are joined
//! into a single message. This stage never fails; when the analyzer has
//! too little data to work with, a fixed fallback message is returned
//! instead.

use tracing::debug;

use crate::models::{IncomeRecord, MonthlySeries, PatternAnalysis, Prediction, Volatility};

use super::aggregate::aggregate_monthly;
use super::patterns::analyze_income_patterns;

/// Returned when the pattern analyzer has too little data
const FALLBACK_ADVICE: &str = "We need more income data to provide personalized financial \
     advice. Continue tracking your income to receive tailored recommendations.";

/// Predictions more than 10% away from the latest month trigger a fragment
const PREDICTION_SHIFT_THRESHOLD: f64 = 0.1;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Compose a financial advice message from the income history and an
/// already-computed prediction list (which may be empty)
pub fn generate_financial_advice(records: &[IncomeRecord], predictions: &[Prediction]) -> String {
    let analysis = match analyze_income_patterns(records) {
        Ok(analysis) => analysis,
        Err(e) => {
            debug!(error = %e, "Falling back to generic advice");
            return FALLBACK_ADVICE.to_string();
        }
    };

    let series = aggregate_monthly(records);

    let mut fragments = vec![
        trend_fragment(&analysis).to_string(),
        volatility_fragment(&analysis, series.mean()),
    ];
    if let Some(fragment) = seasonality_fragment(&analysis) {
        fragments.push(fragment);
    }
    if let Some(fragment) = prediction_fragment(&series, predictions) {
        fragments.push(fragment);
    }

    fragments.join(" ")
}

fn trend_fragment(analysis: &PatternAnalysis) -> &'static str {
    use crate::models::TrendDirection::*;

    match analysis.trend {
        Increasing => {
            "Your income is trending upward. Consider allocating the additional income \
             to savings or debt reduction."
        }
        Decreasing => {
            "Your income appears to be decreasing. Consider reviewing your income \
             sources and looking for additional opportunities."
        }
        Stable => {
            "Your income has been relatively stable. This is a good time to focus on \
             optimizing your budget and savings rate."
        }
    }
}

fn volatility_fragment(analysis: &PatternAnalysis, avg_monthly_income: f64) -> String {
    // Each band pairs its description with the emergency-fund sizing in
    // months of income
    let (lead, months) = match analysis.volatility {
        Volatility::High => (
            "Your income shows high variability. We recommend building",
            6.0,
        ),
        Volatility::Medium => (
            "Your income has moderate variability. We recommend maintaining",
            4.0,
        ),
        Volatility::Low => (
            "Your income is relatively consistent. We still recommend keeping",
            3.0,
        ),
    };

    let fund = (avg_monthly_income * months).round();
    format!(
        "{} an emergency fund of at least ${:.0} to cover {:.0} months of expenses.",
        lead, fund, months
    )
}

fn seasonality_fragment(analysis: &PatternAnalysis) -> Option<String> {
    if !analysis.seasonality || analysis.low_months.is_empty() {
        return None;
    }

    let low_months: Vec<&str> = analysis
        .low_months
        .iter()
        .map(|&m| MONTH_NAMES[(m as usize - 1) % 12])
        .collect();

    Some(format!(
        "We've identified seasonality in your income with typically lower earnings \
         in {}. Consider setting aside extra savings during high-income months to \
         prepare for these periods.",
        low_months.join(", ")
    ))
}

fn prediction_fragment(series: &MonthlySeries, predictions: &[Prediction]) -> Option<String> {
    if predictions.is_empty() {
        return None;
    }

    let latest = *series.totals.last()?;
    let average_predicted = predictions
        .iter()
        .map(|p| p.predicted_amount)
        .sum::<f64>()
        / predictions.len() as f64;

    if average_predicted > latest * (1.0 + PREDICTION_SHIFT_THRESHOLD) {
        let percent = ((average_predicted / latest - 1.0) * 100.0).round();
        Some(format!(
            "Based on our predictions, your income is likely to increase by \
             approximately {:.0}% in the coming months. This is a good opportunity \
             to increase your savings rate.",
            percent
        ))
    } else if average_predicted < latest * (1.0 - PREDICTION_SHIFT_THRESHOLD) {
        let percent = ((1.0 - average_predicted / latest) * 100.0).round();
        Some(format!(
            "Our predictions suggest your income may decrease by approximately \
             {:.0}% in the coming months. Consider preparing by reducing \
             discretionary spending now.",
            percent
        ))
    } else {
        None
    }
}
