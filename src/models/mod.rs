//! Model capability for walk-forward evaluation

use crate::error::{EvalError, Result};
use ndarray::{s, Array2, ArrayView3};
use std::fmt::Debug;

/// Opaque handle to a trained predictive model.
///
/// A model receives an input window of shape `(1, n_input, feature_width)`
/// and returns one batch of forecasts of shape `(1, forecast_width)`. The
/// evaluation core never owns, trains, or mutates the model, it only invokes
/// it. Any externally trained model (LSTM, Transformer, statistical) can be
/// wrapped in this trait; the implementations in this module are
/// deterministic baselines that double as test stubs.
pub trait PredictiveModel: Debug {
    /// Forecast one step from an input window.
    fn predict(&self, input: ArrayView3<'_, f64>) -> Result<Array2<f64>>;

    /// Width of the forecast vector a single invocation produces.
    fn output_width(&self) -> usize;

    /// Name of the model.
    fn name(&self) -> &str;
}

/// Extract the close values (first feature) from an input window.
///
/// Validates the window contract: exactly one batch, at least one timestep
/// and one feature.
pub(crate) fn close_values(input: &ArrayView3<'_, f64>) -> Result<Vec<f64>> {
    let (batches, steps, width) = input.dim();
    if batches != 1 {
        return Err(EvalError::ValidationError(format!(
            "Expected a single input batch, got {}",
            batches
        )));
    }
    if steps == 0 || width == 0 {
        return Err(EvalError::ValidationError(
            "Input window must have at least one timestep and one feature".to_string(),
        ));
    }

    Ok(input.slice(s![0, .., 0]).to_vec())
}

pub mod persistence;
pub mod window_mean;
