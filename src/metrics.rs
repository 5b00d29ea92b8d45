//! Statistics for evaluating walk-forward predictions

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Forecast quality report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Absolute deviation of predicted variance from actual variance,
    /// relative to actual variance
    pub variance_ratio: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

impl std::fmt::Display for EvalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Walk-Forward Evaluation Metrics:")?;
        writeln!(f, "  Variance ratio: {:.4}", self.variance_ratio)?;
        writeln!(f, "  MAPE:           {:.4}%", self.mape)?;
        writeln!(f, "  MAE:            {:.4}", self.mae)?;
        writeln!(f, "  RMSE:           {:.4}", self.rmse)?;
        Ok(())
    }
}

/// Evaluate predictions against actual values.
///
/// Both slices are flattened series and must have the same non-zero length.
/// Degenerate inputs (zero actual variance, all-zero actuals) are reported
/// as [`EvalError::DegenerateSeries`] rather than propagating NaN.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<EvalReport> {
    Ok(EvalReport {
        variance_ratio: variance_ratio(actual, predicted)?,
        mape: mape(actual, predicted)?,
        mae: mean_absolute_error(actual, predicted)?,
        rmse: root_mean_squared_error(actual, predicted)?,
    })
}

/// Absolute deviation of predicted variance from actual variance, relative
/// to actual variance: `|1 - var(predicted) / var(actual)|`.
///
/// Variances are population variances. A constant actual series leaves the
/// ratio undefined and is reported as a degenerate-series error.
pub fn variance_ratio(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(actual, predicted)?;

    let var_actual = actual.iter().population_variance();
    if var_actual == 0.0 {
        return Err(EvalError::DegenerateSeries(
            "Actual series has zero variance".to_string(),
        ));
    }
    let var_predicted = predicted.iter().population_variance();

    Ok((1.0 - var_predicted / var_actual).abs())
}

/// Mean Absolute Percentage Error, in percent.
///
/// Pairs whose actual value is zero are skipped and the mean is taken over
/// the retained pairs. A series whose actual values are all zero leaves the
/// metric undefined and is reported as a degenerate-series error.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(actual, predicted)?;

    let mut sum = 0.0;
    let mut kept = 0usize;
    for (&a, &p) in actual.iter().zip(predicted.iter()) {
        if a == 0.0 {
            continue;
        }
        sum += ((a - p).abs() / a.abs()) * 100.0;
        kept += 1;
    }

    if kept == 0 {
        return Err(EvalError::DegenerateSeries(
            "Every actual value is zero, MAPE is undefined".to_string(),
        ));
    }

    Ok(sum / kept as f64)
}

/// Mean Absolute Error.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Root Mean Squared Error.
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    Ok((sum / actual.len() as f64).sqrt())
}

fn check_paired(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() || actual.is_empty() {
        return Err(EvalError::ValidationError(
            "Actual and predicted values must have the same non-zero length".to_string(),
        ));
    }
    Ok(())
}
