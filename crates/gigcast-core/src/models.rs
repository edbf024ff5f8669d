//! Domain models for Gigcast

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single income transaction supplied by the caller
///
/// The engine only reads the date and amount; `source` is carried through
/// for the caller's benefit and never enters the numeric pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub date: NaiveDate,
    /// Non-negative amount earned
    pub amount: f64,
    /// Where the income came from (gig platform, client, etc.)
    pub source: Option<String>,
}

impl IncomeRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The calendar month this record falls in
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.date.year(),
            month: self.date.month(),
        }
    }
}

/// A calendar (year, month) bucket
///
/// Derives Ord so a BTreeMap keyed by MonthKey iterates chronologically.
/// This replaces string keys on purpose: "2023-10" sorts before "2023-2"
/// lexically, so chronological order must come from the tuple, not the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Monthly income totals in ascending chronological order
///
/// Produced by the aggregator; every downstream stage consumes this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub months: Vec<MonthKey>,
    pub totals: Vec<f64>,
}

impl MonthlySeries {
    /// Number of distinct months observed
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The most recent observed month, if any
    pub fn last_month(&self) -> Option<MonthKey> {
        self.months.last().copied()
    }

    /// Mean of the monthly totals (0 for an empty series)
    pub fn mean(&self) -> f64 {
        if self.totals.is_empty() {
            return 0.0;
        }
        self.totals.iter().sum::<f64>() / self.totals.len() as f64
    }
}

/// Ordinary-least-squares line fit over month index -> monthly total
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Trend value at month index `x`
    pub fn project(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Seasonality period: months per cycle
pub const PERIOD: usize = 12;

/// Multiplicative seasonal factors, one per position in the 12-month cycle
///
/// Invariant: the factors sum to the period length (12). The neutral table
/// (all 1s) is used whenever fewer than 12 months of history exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalIndexTable {
    factors: [f64; PERIOD],
}

impl SeasonalIndexTable {
    pub fn new(factors: [f64; PERIOD]) -> Self {
        Self { factors }
    }

    /// All-1 table: no seasonal adjustment
    pub fn neutral() -> Self {
        Self {
            factors: [1.0; PERIOD],
        }
    }

    /// Factor for a cycle position (0-11)
    pub fn factor(&self, position: usize) -> f64 {
        self.factors[position % PERIOD]
    }

    pub fn factors(&self) -> &[f64; PERIOD] {
        &self.factors
    }
}

/// A forecasted future month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Calendar month 1-12
    pub month: u32,
    pub year: i32,
    /// Non-negative, rounded to 2 decimal places
    pub predicted_amount: f64,
    /// Heuristic score in [0, 0.95]
    pub confidence: f64,
}

/// Direction of the fitted income trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrendDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "increasing" => Ok(TrendDirection::Increasing),
            "decreasing" => Ok(TrendDirection::Decreasing),
            "stable" => Ok(TrendDirection::Stable),
            _ => Err(format!("Unknown trend direction: {}", s)),
        }
    }
}

/// Month-to-month variability band, from the coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    High,
    Medium,
    Low,
}

impl Volatility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Volatility::High => "high",
            Volatility::Medium => "medium",
            Volatility::Low => "low",
        }
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Volatility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "high" => Ok(Volatility::High),
            "medium" => Ok(Volatility::Medium),
            "low" => Ok(Volatility::Low),
            _ => Err(format!("Unknown volatility: {}", s)),
        }
    }
}

/// Qualitative classification of an income history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub trend: TrendDirection,
    pub volatility: Volatility,
    /// True when the seasonal factors vary enough to matter
    pub seasonality: bool,
    /// Calendar months (1-12) with notably high seasonal factors
    pub peak_months: Vec<u32>,
    /// Calendar months (1-12) with notably low seasonal factors
    pub low_months: Vec<u32>,
}
