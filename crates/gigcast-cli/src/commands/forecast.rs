//! Forecast command implementation

use std::path::Path;

use anyhow::Result;
use gigcast_core::{aggregate_monthly, predict_future_income};

use super::{load_records, month_name};

pub fn cmd_forecast(file: &Path, months: usize, json: bool) -> Result<()> {
    let records = load_records(file)?;
    let predictions = predict_future_income(&records, months)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&predictions)?);
        return Ok(());
    }

    let series = aggregate_monthly(&records);

    println!();
    println!("📈 Income Forecast");
    println!(
        "   Based on {} months of history ({} records)",
        series.len(),
        records.len()
    );
    println!("   ─────────────────────────────────────");
    println!(
        "   {:10} │ {:>12} │ {:>10}",
        "Month", "Predicted", "Confidence"
    );
    println!("   ───────────┼──────────────┼───────────");

    for p in &predictions {
        println!(
            "   {:10} │ {:>12.2} │ {:>9.0}%",
            format!("{} {}", month_name(p.month), p.year),
            p.predicted_amount,
            p.confidence * 100.0
        );
    }
    println!();

    Ok(())
}
