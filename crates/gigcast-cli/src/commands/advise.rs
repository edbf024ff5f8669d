//! Advise command implementation

use std::path::Path;

use anyhow::Result;
use gigcast_core::{generate_financial_advice, predict_future_income};

use super::load_records;

pub fn cmd_advise(file: &Path, months: usize) -> Result<()> {
    let records = load_records(file)?;

    // Predictions enrich the advice but are not required for it; with a
    // short history the advice generator falls back on its own.
    let predictions = match predict_future_income(&records, months) {
        Ok(predictions) => predictions,
        Err(e) => {
            tracing::debug!(error = %e, "Advising without predictions");
            Vec::new()
        }
    };

    let advice = generate_financial_advice(&records, &predictions);

    println!();
    println!("💡 Financial Advice");
    println!("   ─────────────────────────────────────");
    // One sentence per line for terminal readability
    for sentence in advice.split_inclusive(". ") {
        println!("   {}", sentence.trim_end());
    }
    println!();

    Ok(())
}
