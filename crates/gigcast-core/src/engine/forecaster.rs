//! Future income projection

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{IncomeRecord, Prediction, PERIOD};

use super::aggregate::aggregate_monthly;
use super::seasonal::seasonal_index;
use super::trend::fit_trend;

/// Minimum distinct aggregated months required to forecast
pub const MIN_FORECAST_MONTHS: usize = 6;

/// Months of history at which the data-length confidence contribution caps
const DATA_LENGTH_HORIZON: f64 = 24.0;
/// Ceiling on the data-length contribution
const DATA_LENGTH_CAP: f64 = 0.5;
/// Fixed recency contribution
const RECENCY_FACTOR: f64 = 0.3;
/// Fixed variability contribution (policy constant, not measured)
const VARIABILITY_FACTOR: f64 = 0.2;
/// Overall confidence ceiling
const MAX_CONFIDENCE: f64 = 0.95;

/// Round to 2 decimal places
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Project future monthly income from the historical record list
///
/// Extends the fitted trend line one month at a time past the last observed
/// month and applies the seasonal factor for each target calendar month.
/// Fails with [`Error::InsufficientData`] when fewer than 6 distinct months
/// have been observed.
pub fn predict_future_income(
    records: &[IncomeRecord],
    num_predictions: usize,
) -> Result<Vec<Prediction>> {
    let series = aggregate_monthly(records);
    let n = series.len();

    if n < MIN_FORECAST_MONTHS {
        return Err(Error::InsufficientData {
            required: MIN_FORECAST_MONTHS,
            actual: n,
        });
    }

    let trend = fit_trend(&series.totals);
    let table = seasonal_index(&series.totals);
    let last = series.months[n - 1];

    let data_length_factor = (n as f64 / DATA_LENGTH_HORIZON).min(DATA_LENGTH_CAP);
    let confidence =
        (data_length_factor + RECENCY_FACTOR + VARIABILITY_FACTOR).min(MAX_CONFIDENCE);

    let mut predictions = Vec::with_capacity(num_predictions);

    for i in 1..=num_predictions {
        // Walk the calendar forward from the last observed month
        let steps = last.month as usize - 1 + i;
        let month = (steps % PERIOD) as u32 + 1;
        let year = last.year + (steps / PERIOD) as i32;

        let base = trend.project((n + i - 1) as f64);
        let factor = table.factor(month as usize - 1);
        let predicted_amount = round_cents(base * factor).max(0.0);

        predictions.push(Prediction {
            month,
            year,
            predicted_amount,
            confidence,
        });
    }

    debug!(
        months = n,
        predictions = predictions.len(),
        slope = trend.slope,
        "Forecast complete"
    );

    Ok(predictions)
}
