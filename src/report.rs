//! Comparison output for external charting

use crate::error::{EvalError, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Write an actual-vs-predicted comparison CSV.
///
/// One row per flattened observation: date, actual close, predicted close.
/// The optional `label` only names the prediction column; it never affects
/// the values written.
pub fn write_comparison_csv<P: AsRef<Path>>(
    path: P,
    dates: &[NaiveDate],
    actual: &[f64],
    predicted: &[f64],
    label: Option<&str>,
) -> Result<()> {
    if actual.len() != predicted.len() || dates.len() != actual.len() {
        return Err(EvalError::ValidationError(
            "Dates, actual and predicted values must have the same length".to_string(),
        ));
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "actual", label.unwrap_or("predicted")])?;
    for ((date, a), p) in dates.iter().zip(actual.iter()).zip(predicted.iter()) {
        writer.write_record([date.to_string(), a.to_string(), p.to_string()])?;
    }
    writer.flush()?;

    Ok(())
}
