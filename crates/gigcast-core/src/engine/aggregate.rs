//! Monthly aggregation of raw income records

use std::collections::BTreeMap;

use crate::models::{IncomeRecord, MonthKey, MonthlySeries};

/// Sum income records into one total per calendar month
///
/// The BTreeMap keyed by (year, month) guarantees the series comes out in
/// ascending chronological order regardless of input order. An empty input
/// yields an empty series; minimum-length checks belong to the callers.
pub fn aggregate_monthly(records: &[IncomeRecord]) -> MonthlySeries {
    let mut by_month: BTreeMap<MonthKey, f64> = BTreeMap::new();

    for record in records {
        *by_month.entry(record.month_key()).or_insert(0.0) += record.amount;
    }

    let (months, totals) = by_month.into_iter().unzip();
    MonthlySeries { months, totals }
}
