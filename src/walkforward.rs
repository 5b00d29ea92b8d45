//! Walk-forward evaluation over a held-out test set

use crate::error::Result;
use crate::forecast::Forecaster;
use crate::models::PredictiveModel;
use ndarray::{Array1, Array2};
use tracing::{debug, info};

/// Drives a forecaster across a held-out test set, extending history with
/// ground truth after each step.
#[derive(Debug)]
pub struct WalkForward<M: PredictiveModel> {
    forecaster: Forecaster<M>,
}

impl<M: PredictiveModel> WalkForward<M> {
    /// Create a new walk-forward runner.
    pub fn new(model: M, n_input: usize) -> Result<Self> {
        Ok(Self {
            forecaster: Forecaster::new(model, n_input)?,
        })
    }

    /// Get the underlying forecaster.
    pub fn forecaster(&self) -> &Forecaster<M> {
        &self.forecaster
    }

    /// Run one walk-forward pass.
    ///
    /// The history buffer starts as a copy of `train`. Each step forecasts
    /// from the current history, records the prediction, then appends the
    /// true test block before the next step. Feeding ground truth back into
    /// history is intentional: it simulates retraining-free deployment where
    /// each observation becomes available before the next forecast.
    ///
    /// Returns exactly `test.len()` predictions, in test order. The first
    /// model failure aborts the run with no partial results.
    pub fn run(
        &self,
        train: &[Array2<f64>],
        test: &[Array2<f64>],
    ) -> Result<Vec<Array1<f64>>> {
        info!(
            model = self.forecaster.model().name(),
            n_input = self.forecaster.n_input(),
            train_blocks = train.len(),
            test_blocks = test.len(),
            "starting walk-forward evaluation"
        );

        let mut history: Vec<Array2<f64>> = train.to_vec();
        let mut predictions = Vec::with_capacity(test.len());

        for (step, block) in test.iter().enumerate() {
            let yhat = self.forecaster.forecast(&history)?;
            debug!(step, history_blocks = history.len(), "recorded forecast");
            predictions.push(yhat);
            history.push(block.clone());
        }

        info!(steps = predictions.len(), "walk-forward evaluation complete");
        Ok(predictions)
    }
}

/// Flatten a prediction series into one ordered sequence of values.
pub fn flatten_predictions(predictions: &[Array1<f64>]) -> Vec<f64> {
    predictions.iter().flat_map(|p| p.iter().copied()).collect()
}
