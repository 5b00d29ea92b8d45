//! Price series handling for walk-forward evaluation

use crate::error::{EvalError, Result};
use chrono::NaiveDate;
use ndarray::Array2;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::path::Path;

/// Univariate close-price series with a date axis.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    /// Trading dates, one per observation
    dates: Vec<NaiveDate>,
    /// Closing prices, one per observation
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Create a new price series from dates and closing prices.
    pub fn new(dates: Vec<NaiveDate>, closes: Vec<f64>) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(EvalError::DataError(format!(
                "Date axis has {} entries, close series has {}",
                dates.len(),
                closes.len()
            )));
        }
        if closes.is_empty() {
            return Err(EvalError::DataError("Close series is empty".to_string()));
        }
        Ok(Self { dates, closes })
    }

    /// Create a price series with a sequential synthetic date axis.
    ///
    /// Useful when only the close values matter, e.g. in tests and demos.
    pub fn from_closes(closes: Vec<f64>) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
        let dates = (0..closes.len())
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        Self::new(dates, closes)
    }

    /// Generate a seeded Gaussian random-walk price series.
    pub fn synthetic_random_walk(
        len: usize,
        start_price: f64,
        daily_vol: f64,
        seed: u64,
    ) -> Result<Self> {
        if len == 0 {
            return Err(EvalError::InvalidParameter(
                "Series length must be positive".to_string(),
            ));
        }
        if start_price <= 0.0 {
            return Err(EvalError::InvalidParameter(
                "Start price must be positive".to_string(),
            ));
        }
        let normal = Normal::new(0.0, daily_vol)
            .map_err(|e| EvalError::InvalidParameter(format!("Invalid volatility: {}", e)))?;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut closes = Vec::with_capacity(len);
        let mut price = start_price;
        for _ in 0..len {
            price *= 1.0 + normal.sample(&mut rng);
            // keep prices strictly positive
            price = price.max(0.01);
            closes.push(price);
        }

        Self::from_closes(closes)
    }

    /// Load a price series from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(&df)
    }

    /// Build a price series from an existing DataFrame.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let time_column = detect_time_column(df)?;
        let close_column = detect_close_column(df)?;

        let dates = column_as_dates(df, &time_column)?;
        let closes = column_as_f64(df, &close_column)?;

        Self::new(dates, closes)
    }

    /// Get the date axis.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Get the closing prices.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Get the length of the series.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Group the close series into fixed-length weekly blocks.
    ///
    /// Each block has shape `(block_len, 1)`. The series length must be a
    /// multiple of `block_len`; trailing partial weeks are rejected rather
    /// than silently dropped.
    pub fn to_weekly_blocks(&self, block_len: usize) -> Result<Vec<Array2<f64>>> {
        if block_len == 0 {
            return Err(EvalError::InvalidParameter(
                "Block length must be positive".to_string(),
            ));
        }
        if self.closes.len() % block_len != 0 {
            return Err(EvalError::ValidationError(format!(
                "Series length {} is not a multiple of block length {}",
                self.closes.len(),
                block_len
            )));
        }

        self.closes
            .chunks(block_len)
            .map(|chunk| {
                Array2::from_shape_vec((block_len, 1), chunk.to_vec())
                    .map_err(|e| EvalError::DataError(format!("Block shaping failed: {}", e)))
            })
            .collect()
    }
}

/// Split weekly blocks into training and test sets, preserving order.
///
/// An out-of-range `test_ratio` yields an empty test set.
pub fn train_test_split(
    blocks: &[Array2<f64>],
    test_ratio: f64,
) -> (Vec<Array2<f64>>, Vec<Array2<f64>>) {
    if blocks.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (blocks.to_vec(), Vec::new());
    }

    let test_size = (blocks.len() as f64 * test_ratio).round() as usize;
    let train_size = blocks.len() - test_size;

    let train = blocks[..train_size].to_vec();
    let test = blocks[train_size..].to_vec();

    (train, test)
}

/// Flatten blocks into one ordered sequence of values, row-major.
pub fn flatten_blocks(blocks: &[Array2<f64>]) -> Vec<f64> {
    blocks.iter().flat_map(|b| b.iter().copied()).collect()
}

/// Detect the time column in a DataFrame.
fn detect_time_column(df: &DataFrame) -> Result<String> {
    for name in df.get_column_names() {
        let lower_name = name.to_lowercase();
        if lower_name.contains("time") || lower_name.contains("date") {
            return Ok(name.to_string());
        }
    }

    Err(EvalError::DataError(
        "No time column found in data".to_string(),
    ))
}

/// Detect the close-price column in a DataFrame.
fn detect_close_column(df: &DataFrame) -> Result<String> {
    let column_names = df.get_column_names();

    for name in &column_names {
        if name.to_lowercase().contains("close") {
            return Ok(name.to_string());
        }
    }
    for name in &column_names {
        if name.to_lowercase().contains("price") {
            return Ok(name.to_string());
        }
    }

    Err(EvalError::DataError(
        "No close price column found in data".to_string(),
    ))
}

/// Get a column as f64 values.
fn column_as_f64(df: &DataFrame, column_name: &str) -> Result<Vec<f64>> {
    let col = df.column(column_name).map_err(|e| {
        EvalError::DataError(format!("Column '{}' not found: {}", column_name, e))
    })?;

    match col.dtype() {
        DataType::Float64 => Ok(col.f64().unwrap().into_iter().flatten().collect()),
        DataType::Float32 => Ok(col
            .f32()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::Int64 => Ok(col
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::Int32 => Ok(col
            .i32()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        _ => Err(EvalError::DataError(format!(
            "Column '{}' cannot be converted to f64",
            column_name
        ))),
    }
}

/// Get a column as calendar dates.
fn column_as_dates(df: &DataFrame, column_name: &str) -> Result<Vec<NaiveDate>> {
    let col = df.column(column_name).map_err(|e| {
        EvalError::DataError(format!("Column '{}' not found: {}", column_name, e))
    })?;

    match col.dtype() {
        DataType::Utf8 => col
            .utf8()
            .unwrap()
            .into_iter()
            .map(|opt| {
                let raw = opt.ok_or_else(|| {
                    EvalError::DataError(format!("Missing value in date column '{}'", column_name))
                })?;
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                    EvalError::DataError(format!("Unparseable date '{}': {}", raw, e))
                })
            })
            .collect(),
        DataType::Date => Ok(col
            .date()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|days| {
                NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days as i64)
            })
            .collect()),
        _ => Err(EvalError::DataError(format!(
            "Column '{}' cannot be read as dates",
            column_name
        ))),
    }
}
