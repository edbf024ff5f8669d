//! Income pattern classification

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{IncomeRecord, PatternAnalysis, TrendDirection, Volatility, PERIOD};

use super::aggregate::aggregate_monthly;
use super::seasonal::seasonal_index;
use super::trend::fit_trend;

/// Minimum distinct aggregated months required for analysis
pub const MIN_ANALYSIS_MONTHS: usize = 3;

/// Slope threshold, as a fraction of the mean monthly total
const TREND_THRESHOLD: f64 = 0.05;
/// Coefficient-of-variation cut-off for high volatility
const HIGH_VOLATILITY_CV: f64 = 0.3;
/// Coefficient-of-variation cut-off for medium volatility
const MEDIUM_VOLATILITY_CV: f64 = 0.15;
/// Factor-table cv above which seasonality is reported
const SEASONALITY_CV: f64 = 0.1;
/// Distance from the factor mean that marks a peak or low month
const PEAK_LOW_MARGIN: f64 = 0.15;

/// Population standard deviation
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Classify trend direction, volatility band, and seasonality for an
/// income history
///
/// Fails with [`Error::InsufficientData`] when fewer than 3 distinct months
/// have been observed. Seasonality is only evaluated once a full 12-month
/// cycle exists; below that it is reported as absent with empty peak/low
/// lists.
pub fn analyze_income_patterns(records: &[IncomeRecord]) -> Result<PatternAnalysis> {
    let series = aggregate_monthly(records);
    let n = series.len();

    if n < MIN_ANALYSIS_MONTHS {
        return Err(Error::InsufficientData {
            required: MIN_ANALYSIS_MONTHS,
            actual: n,
        });
    }

    let mean = series.mean();
    let trend_model = fit_trend(&series.totals);

    let trend = if trend_model.slope > TREND_THRESHOLD * mean {
        TrendDirection::Increasing
    } else if trend_model.slope < -TREND_THRESHOLD * mean {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    let cv = std_dev(&series.totals) / mean;
    let volatility = if cv > HIGH_VOLATILITY_CV {
        Volatility::High
    } else if cv > MEDIUM_VOLATILITY_CV {
        Volatility::Medium
    } else {
        Volatility::Low
    };

    let mut seasonality = false;
    let mut peak_months = Vec::new();
    let mut low_months = Vec::new();

    if n >= PERIOD {
        let table = seasonal_index(&series.totals);
        let factors = table.factors();

        let factor_mean = factors.iter().sum::<f64>() / factors.len() as f64;
        let factor_cv = std_dev(factors) / factor_mean;
        seasonality = factor_cv > SEASONALITY_CV;

        for (position, &factor) in factors.iter().enumerate() {
            let month = position as u32 + 1;
            if factor > factor_mean + PEAK_LOW_MARGIN {
                peak_months.push(month);
            } else if factor < factor_mean - PEAK_LOW_MARGIN {
                low_months.push(month);
            }
        }
    }

    debug!(
        months = n,
        trend = trend.as_str(),
        volatility = volatility.as_str(),
        seasonality,
        "Pattern analysis complete"
    );

    Ok(PatternAnalysis {
        trend,
        volatility,
        seasonality,
        peak_months,
        low_months,
    })
}
