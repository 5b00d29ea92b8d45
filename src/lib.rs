//! # Forecast Eval
//!
//! A Rust library for walk-forward evaluation of pre-trained time series
//! forecasting models against held-out stock price data.
//!
//! ## Features
//!
//! - Opaque model capability ([`PredictiveModel`]) so any trained model can
//!   be plugged in, with deterministic baselines included
//! - Rolling-window forecast generation ([`Forecaster`])
//! - Walk-forward evaluation over a held-out test set ([`WalkForward`]):
//!   each step's ground truth extends history before the next forecast
//! - Forecast quality statistics (variance ratio, MAPE, MAE, RMSE)
//! - CSV ingestion of close-price series and comparison-report output
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_eval::data::{train_test_split, PriceSeries};
//! use forecast_eval::models::persistence::Persistence;
//! use forecast_eval::{evaluate, flatten_blocks, flatten_predictions, WalkForward};
//!
//! # fn main() -> forecast_eval::Result<()> {
//! // Five weeks of closes, grouped into 5-row weekly blocks
//! let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
//! let series = PriceSeries::from_closes(closes)?;
//! let blocks = series.to_weekly_blocks(5)?;
//! let (train, test) = train_test_split(&blocks, 0.4);
//!
//! // Walk-forward run with a naive baseline standing in for a trained model
//! let runner = WalkForward::new(Persistence::new(5)?, 10)?;
//! let predictions = runner.run(&train, &test)?;
//! assert_eq!(predictions.len(), test.len());
//!
//! let report = evaluate(&flatten_blocks(&test), &flatten_predictions(&predictions))?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod report;
pub mod walkforward;

// Re-export commonly used types
pub use crate::data::{flatten_blocks, PriceSeries};
pub use crate::error::{EvalError, Result};
pub use crate::forecast::Forecaster;
pub use crate::metrics::{evaluate, EvalReport};
pub use crate::models::PredictiveModel;
pub use crate::walkforward::{flatten_predictions, WalkForward};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
