//! Naive persistence baseline

use crate::error::{EvalError, Result};
use crate::models::{close_values, PredictiveModel};
use ndarray::{Array2, ArrayView3};

/// Persistence model: repeats the last observed close across the horizon.
///
/// The classic "tomorrow looks like today" baseline a trained model has to
/// beat.
#[derive(Debug, Clone)]
pub struct Persistence {
    /// Name of the model
    name: String,
    /// Forecast horizon
    horizon: usize,
}

impl Persistence {
    /// Create a new persistence model.
    pub fn new(horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(EvalError::InvalidParameter(
                "Forecast horizon must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Persistence (horizon={})", horizon),
            horizon,
        })
    }
}

impl PredictiveModel for Persistence {
    fn predict(&self, input: ArrayView3<'_, f64>) -> Result<Array2<f64>> {
        let closes = close_values(&input)?;
        let last = closes[closes.len() - 1];

        Ok(Array2::from_elem((1, self.horizon), last))
    }

    fn output_width(&self) -> usize {
        self.horizon
    }

    fn name(&self) -> &str {
        &self.name
    }
}
