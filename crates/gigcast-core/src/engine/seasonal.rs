//! Seasonal index calculation (ratio-to-moving-average)

use tracing::debug;

use crate::models::{SeasonalIndexTable, PERIOD};

/// Centered moving average of `window` over the series
///
/// Produces n - window + 1 values; empty when the series is shorter than
/// the window.
fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if data.len() < window {
        return Vec::new();
    }

    (0..=data.len() - window)
        .map(|i| data[i..i + window].iter().sum::<f64>() / window as f64)
        .collect()
}

/// Compute normalized seasonal factors for a monthly series
///
/// Ratio-to-moving-average decomposition over the fixed 12-month cycle:
/// each observed/moving-average ratio lands in the bucket for its offset
/// within the cycle, bucket ratios are averaged (empty buckets default
/// to 1), and the factors are scaled to sum to the period length.
///
/// With fewer than 12 months of history there is no cycle to measure, so
/// the neutral all-1 table is returned. That is policy, not an error.
///
/// The half-period offset means the first and last 6 months of the series
/// never contribute a ratio; that boundary exclusion is inherent to the
/// method.
pub fn seasonal_index(totals: &[f64]) -> SeasonalIndexTable {
    if totals.len() < PERIOD {
        debug!(
            months = totals.len(),
            "Under one full cycle of history, using neutral seasonal factors"
        );
        return SeasonalIndexTable::neutral();
    }

    let ma = moving_average(totals, PERIOD);
    let half = PERIOD / 2;

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); PERIOD];
    for (i, avg) in ma.iter().enumerate() {
        let position = (i + half) % PERIOD;
        buckets[position].push(totals[i + half] / avg);
    }

    let mut factors = [1.0; PERIOD];
    for (position, ratios) in buckets.iter().enumerate() {
        if !ratios.is_empty() {
            factors[position] = ratios.iter().sum::<f64>() / ratios.len() as f64;
        }
    }

    // Normalize so the factors sum exactly to the period length
    let total: f64 = factors.iter().sum();
    let normalizer = PERIOD as f64 / total;
    for factor in &mut factors {
        *factor *= normalizer;
    }

    SeasonalIndexTable::new(factors)
}
