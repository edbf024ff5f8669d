//! CSV import for income records
//!
//! Expected format: a header row with `date`, `amount`, and optionally
//! `source` columns, in any order. Additional columns are ignored.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::IncomeRecord;

/// Parse income records from CSV data
///
/// Rejects negative amounts and unparseable dates so the engine can assume
/// clean, non-negative input.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<IncomeRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_col = find_column(&headers, "date")
        .ok_or_else(|| Error::InvalidRecord("Missing 'date' column".into()))?;
    let amount_col = find_column(&headers, "amount")
        .ok_or_else(|| Error::InvalidRecord("Missing 'amount' column".into()))?;
    let source_col = find_column(&headers, "source");

    let mut records = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;

        let date_str = record
            .get(date_col)
            .ok_or_else(|| Error::InvalidRecord(format!("Row {}: missing date", line + 2)))?;
        let date = parse_date(date_str)?;

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::InvalidRecord(format!("Row {}: missing amount", line + 2)))?;
        let amount = parse_amount(amount_str)?;

        if amount < 0.0 {
            return Err(Error::InvalidRecord(format!(
                "Row {}: income amount cannot be negative ({})",
                line + 2,
                amount
            )));
        }

        let source = source_col
            .and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        records.push(IncomeRecord {
            date,
            amount,
            source,
        });
    }

    debug!(count = records.len(), "Parsed income records from CSV");
    Ok(records)
}

/// Case-insensitive header lookup
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Parse a date string, trying common formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    // %m/%d/%y must come before %m/%d/%Y: %Y greedily accepts a two-digit
    // year as-is (01/15/24 -> year 24), while %y rejects four-digit years,
    // so this order handles both unambiguously.
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%y", // 01/15/24
        "%m/%d/%Y", // 01/15/2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::InvalidRecord(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::InvalidRecord(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let data = "date,amount,source\n2024-01-15,1200.50,Uber\n2024-02-03,850,Freelance\n";
        let records = parse_csv(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(records[0].amount, 1200.50);
        assert_eq!(records[0].source.as_deref(), Some("Uber"));
        assert_eq!(records[1].amount, 850.0);
    }

    #[test]
    fn test_parse_without_source_column() {
        let data = "date,amount\n2024-01-15,100\n";
        let records = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].source.is_none());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("01/15/24").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_two_digit_years_land_in_current_century() {
        // A two-digit year must not be taken literally as year 0024
        assert_eq!(
            parse_date("03/31/24").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert_eq!(
            parse_date("12/01/99").unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 1).unwrap()
        );

        // And a mixed-format file buckets both rows into the same month
        let data = "date,amount\n01/05/24,400\n01/20/2024,600\n";
        let records = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(records[0].month_key(), records[1].month_key());
    }

    #[test]
    fn test_parse_amount_with_currency_formatting() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount(" 850 ").unwrap(), 850.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let data = "date,amount\n2024-01-15,-50\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_date_column_rejected() {
        let data = "when,amount\n2024-01-15,100\n";
        assert!(parse_csv(data.as_bytes()).is_err());
    }
}
