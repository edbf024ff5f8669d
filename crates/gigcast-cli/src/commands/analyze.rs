//! Analyze command implementation

use std::path::Path;

use anyhow::Result;
use gigcast_core::{aggregate_monthly, analyze_income_patterns};

use super::{load_records, month_list};

pub fn cmd_analyze(file: &Path, json: bool) -> Result<()> {
    let records = load_records(file)?;
    let analysis = analyze_income_patterns(&records)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let series = aggregate_monthly(&records);

    println!();
    println!("🔍 Income Patterns");
    println!("   Based on {} months of history", series.len());
    println!("   ─────────────────────────────────────");
    println!("   Trend:       {}", analysis.trend);
    println!("   Volatility:  {}", analysis.volatility);
    println!(
        "   Seasonality: {}",
        if analysis.seasonality { "yes" } else { "no" }
    );
    println!("   Peak months: {}", month_list(&analysis.peak_months));
    println!("   Low months:  {}", month_list(&analysis.low_months));
    println!();

    Ok(())
}
