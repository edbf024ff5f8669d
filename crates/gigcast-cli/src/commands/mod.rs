//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `forecast` - Future income projection report
//! - `analyze` - Income pattern classification report
//! - `advise` - Financial advice narrative

pub mod advise;
pub mod analyze;
pub mod forecast;

// Re-export command functions for main.rs
pub use advise::*;
pub use analyze::*;
pub use forecast::*;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use gigcast_core::{import::parse_csv, IncomeRecord};

/// Load income records from a CSV file
pub fn load_records(path: &Path) -> Result<Vec<IncomeRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Unable to open income file: {}", path.display()))?;
    let records = parse_csv(file)
        .with_context(|| format!("Unable to parse income file: {}", path.display()))?;

    tracing::debug!(
        count = records.len(),
        file = %path.display(),
        "Loaded income records"
    );
    Ok(records)
}

/// Short month name for report output (month is 1-12)
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES[(month as usize - 1) % 12]
}

/// Join month numbers as readable names, or a dash when empty
pub fn month_list(months: &[u32]) -> String {
    if months.is_empty() {
        return "-".to_string();
    }
    months
        .iter()
        .map(|&m| month_name(m))
        .collect::<Vec<_>>()
        .join(", ")
}
