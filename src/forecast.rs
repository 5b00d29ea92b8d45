//! Rolling-window forecast generation

use crate::error::{EvalError, Result};
use crate::models::PredictiveModel;
use ndarray::{concatenate, s, Array1, Array2, Axis};

/// Produces one future-step forecast from a rolling window of observations.
#[derive(Debug)]
pub struct Forecaster<M: PredictiveModel> {
    /// Injected model capability
    model: M,
    /// Input window size, in flattened rows
    n_input: usize,
}

impl<M: PredictiveModel> Forecaster<M> {
    /// Create a new forecaster around a trained model.
    pub fn new(model: M, n_input: usize) -> Result<Self> {
        if n_input == 0 {
            return Err(EvalError::InvalidParameter(
                "Input window size must be positive".to_string(),
            ));
        }

        Ok(Self { model, n_input })
    }

    /// Get the input window size.
    pub fn n_input(&self) -> usize {
        self.n_input
    }

    /// Get the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Forecast the next step from a history of weekly blocks.
    ///
    /// The blocks are flattened in order and the last `n_input` rows form
    /// the model input window of shape `(1, n_input, feature_width)`. The
    /// flattened history must hold at least `n_input` rows; a shorter
    /// history is a contract violation, not recovered here.
    pub fn forecast(&self, history: &[Array2<f64>]) -> Result<Array1<f64>> {
        let flat = flatten_rows(history)?;
        let rows = flat.nrows();
        if rows < self.n_input {
            return Err(EvalError::ValidationError(format!(
                "History has {} rows, need at least {} for the input window",
                rows, self.n_input
            )));
        }

        let window = flat.slice(s![rows - self.n_input.., ..]).to_owned();
        let input = window.insert_axis(Axis(0));

        let output = self.model.predict(input.view())?;
        if output.nrows() != 1 {
            return Err(EvalError::ValidationError(format!(
                "Model returned {} output batches, expected exactly 1",
                output.nrows()
            )));
        }

        Ok(output.row(0).to_owned())
    }
}

/// Concatenate weekly blocks into one ordered sequence of feature rows.
fn flatten_rows(history: &[Array2<f64>]) -> Result<Array2<f64>> {
    if history.is_empty() {
        return Err(EvalError::ValidationError("History is empty".to_string()));
    }

    let views: Vec<_> = history.iter().map(|b| b.view()).collect();
    concatenate(Axis(0), &views).map_err(|e| {
        EvalError::DataError(format!("Blocks have mismatched feature widths: {}", e))
    })
}
