//! Window-average baseline

use crate::error::{EvalError, Result};
use crate::models::{close_values, PredictiveModel};
use ndarray::{Array2, ArrayView3};

/// Window-mean model: forecasts the average close of the input window.
#[derive(Debug, Clone)]
pub struct WindowMean {
    /// Name of the model
    name: String,
    /// Forecast horizon
    horizon: usize,
}

impl WindowMean {
    /// Create a new window-mean model.
    pub fn new(horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(EvalError::InvalidParameter(
                "Forecast horizon must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Window mean (horizon={})", horizon),
            horizon,
        })
    }
}

impl PredictiveModel for WindowMean {
    fn predict(&self, input: ArrayView3<'_, f64>) -> Result<Array2<f64>> {
        let closes = close_values(&input)?;
        let mean = closes.iter().sum::<f64>() / closes.len() as f64;

        Ok(Array2::from_elem((1, self.horizon), mean))
    }

    fn output_width(&self) -> usize {
        self.horizon
    }

    fn name(&self) -> &str {
        &self.name
    }
}
