//! Income Forecasting Engine
//!
//! A small decomposition pipeline over a sparse, irregularly dated income
//! history:
//!
//! - **Aggregator** - groups raw records into ordered monthly totals
//! - **Trend** - ordinary-least-squares fit over month index
//! - **Seasonal** - ratio-to-moving-average factors over a 12-month cycle
//! - **Forecaster** - projects future months from trend x seasonal factor
//! - **Patterns** - classifies trend, volatility, and seasonality
//! - **Advice** - assembles a narrative from the classifications
//!
//! Every stage is pure, synchronous computation over the caller's record
//! list; nothing is persisted between calls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gigcast_core::engine::{predict_future_income, analyze_income_patterns};
//!
//! let predictions = predict_future_income(&records, 3)?;
//! let analysis = analyze_income_patterns(&records)?;
//! ```

pub mod advice;
pub mod aggregate;
pub mod forecaster;
pub mod patterns;
pub mod seasonal;
pub mod trend;

pub use advice::generate_financial_advice;
pub use aggregate::aggregate_monthly;
pub use forecaster::{predict_future_income, MIN_FORECAST_MONTHS};
pub use patterns::{analyze_income_patterns, MIN_ANALYSIS_MONTHS};
pub use seasonal::seasonal_index;
pub use trend::fit_trend;
