//! Linear trend estimation over monthly totals

use crate::models::TrendModel;

/// Fit a simple linear regression of monthly totals against month index
///
/// x = 0..n-1, y = totals. With zero x-variance (a single month) the slope
/// is undefined; it degenerates to slope 0 with the mean as intercept.
pub fn fit_trend(totals: &[f64]) -> TrendModel {
    let n = totals.len();
    if n == 0 {
        return TrendModel {
            slope: 0.0,
            intercept: 0.0,
        };
    }

    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = totals.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in totals.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        return TrendModel {
            slope: 0.0,
            intercept: mean_y,
        };
    }

    let slope = numerator / denominator;
    TrendModel {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}
