//! Gigcast Core Library
//!
//! An income forecasting engine for people with irregular earnings:
//! - Monthly aggregation of raw income records
//! - Linear trend estimation and seasonal decomposition
//! - Future income projection with heuristic confidence
//! - Pattern classification (trend, volatility, seasonality)
//! - Plain-language financial advice generation
//! - CSV import for income record files
//!
//! The engine is stateless pure computation: every call aggregates the
//! caller's record list from scratch and produces fresh output.

pub mod engine;
pub mod error;
pub mod import;
pub mod models;

pub use engine::{
    aggregate_monthly, analyze_income_patterns, fit_trend, generate_financial_advice,
    predict_future_income, seasonal_index, MIN_ANALYSIS_MONTHS, MIN_FORECAST_MONTHS,
};
pub use error::{Error, Result};
pub use models::{
    IncomeRecord, MonthKey, MonthlySeries, PatternAnalysis, Prediction, SeasonalIndexTable,
    TrendDirection, TrendModel, Volatility, PERIOD,
};
