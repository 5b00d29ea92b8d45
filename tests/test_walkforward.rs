use forecast_eval::error::{EvalError, Result};
use forecast_eval::forecast::Forecaster;
use forecast_eval::models::persistence::Persistence;
use forecast_eval::models::PredictiveModel;
use forecast_eval::walkforward::{flatten_predictions, WalkForward};
use ndarray::{Array2, ArrayView3};
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};

/// A 7-row univariate weekly block holding the given values.
fn block(values: &[f64]) -> Array2<f64> {
    Array2::from_shape_vec((values.len(), 1), values.to_vec()).unwrap()
}

/// Sequential blocks covering `0.0..n_blocks * rows` one row at a time.
fn sequential_blocks(n_blocks: usize, rows: usize, offset: usize) -> Vec<Array2<f64>> {
    (0..n_blocks)
        .map(|b| {
            let start = offset + b * rows;
            let values: Vec<f64> = (start..start + rows).map(|v| v as f64).collect();
            block(&values)
        })
        .collect()
}

/// Records every window it is invoked with and returns a constant forecast.
#[derive(Debug)]
struct RecordingModel {
    horizon: usize,
    windows: RefCell<Vec<Vec<f64>>>,
}

impl RecordingModel {
    fn new(horizon: usize) -> Self {
        Self {
            horizon,
            windows: RefCell::new(Vec::new()),
        }
    }
}

impl PredictiveModel for RecordingModel {
    fn predict(&self, input: ArrayView3<'_, f64>) -> Result<Array2<f64>> {
        self.windows
            .borrow_mut()
            .push(input.iter().copied().collect());
        Ok(Array2::zeros((1, self.horizon)))
    }

    fn output_width(&self) -> usize {
        self.horizon
    }

    fn name(&self) -> &str {
        "recording stub"
    }
}

/// Succeeds `ok_calls` times, then fails on every later invocation.
#[derive(Debug)]
struct FailingModel {
    ok_calls: usize,
    calls: Cell<usize>,
}

impl PredictiveModel for FailingModel {
    fn predict(&self, _input: ArrayView3<'_, f64>) -> Result<Array2<f64>> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n >= self.ok_calls {
            return Err(EvalError::ModelError(
                "inference backend unavailable".to_string(),
            ));
        }
        Ok(Array2::zeros((1, 7)))
    }

    fn output_width(&self) -> usize {
        7
    }

    fn name(&self) -> &str {
        "failing stub"
    }
}

#[test]
fn test_walk_forward_consumes_last_rows_and_grows_history() {
    // 3 training weeks of 7 rows, 2 test weeks, input window of 5 rows
    let train = sequential_blocks(3, 7, 0);
    let test = sequential_blocks(2, 7, 21);

    let runner = WalkForward::new(RecordingModel::new(7), 5).unwrap();
    let predictions = runner.run(&train, &test).unwrap();

    assert_eq!(predictions.len(), 2);

    let windows = runner.forecaster().model().windows.borrow();
    assert_eq!(windows.len(), 2);
    // Step 1: last 5 rows of the 21 flattened training rows
    assert_eq!(windows[0], vec![16.0, 17.0, 18.0, 19.0, 20.0]);
    // Step 2: history grew by the first test week before the second forecast
    assert_eq!(windows[1], vec![23.0, 24.0, 25.0, 26.0, 27.0]);
}

#[test]
fn test_prediction_width_follows_model_not_window() {
    let train = sequential_blocks(3, 7, 0);
    let test = sequential_blocks(2, 7, 21);

    let runner = WalkForward::new(Persistence::new(3).unwrap(), 5).unwrap();
    let predictions = runner.run(&train, &test).unwrap();

    let width = runner.forecaster().model().output_width();
    assert_eq!(width, 3);
    for prediction in &predictions {
        assert_eq!(prediction.len(), width);
    }
}

#[test]
fn test_persistence_predicts_last_observed_close() {
    let train = sequential_blocks(3, 7, 0);
    let test = sequential_blocks(2, 7, 21);

    let runner = WalkForward::new(Persistence::new(7).unwrap(), 5).unwrap();
    let predictions = runner.run(&train, &test).unwrap();

    // Step 1 repeats the last training value, step 2 the last value of test week 1
    assert!(predictions[0].iter().all(|&v| v == 20.0));
    assert!(predictions[1].iter().all(|&v| v == 27.0));
}

#[test]
fn test_deterministic_model_makes_runs_idempotent() {
    let train = sequential_blocks(4, 7, 0);
    let test = sequential_blocks(3, 7, 28);

    let runner = WalkForward::new(Persistence::new(7).unwrap(), 10).unwrap();
    let first = runner.run(&train, &test).unwrap();
    let second = runner.run(&train, &test).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_model_failure_aborts_the_run() {
    let train = sequential_blocks(3, 7, 0);
    let test = sequential_blocks(3, 7, 21);

    let model = FailingModel {
        ok_calls: 1,
        calls: Cell::new(0),
    };
    let runner = WalkForward::new(model, 5).unwrap();

    let err = runner.run(&train, &test).unwrap_err();
    assert!(matches!(err, EvalError::ModelError(_)));
}

#[test]
fn test_short_history_is_a_precondition_failure() {
    // 14 flattened rows in total, window wants 100
    let train = sequential_blocks(1, 7, 0);
    let test = sequential_blocks(1, 7, 7);

    let runner = WalkForward::new(Persistence::new(7).unwrap(), 100).unwrap();
    let err = runner.run(&train, &test).unwrap_err();
    assert!(matches!(err, EvalError::ValidationError(_)));
}

#[test]
fn test_forecaster_rejects_zero_window_and_empty_history() {
    let err = Forecaster::new(Persistence::new(7).unwrap(), 0).unwrap_err();
    assert!(matches!(err, EvalError::InvalidParameter(_)));

    let forecaster = Forecaster::new(Persistence::new(7).unwrap(), 5).unwrap();
    let err = forecaster.forecast(&[]).unwrap_err();
    assert!(matches!(err, EvalError::ValidationError(_)));
}

#[test]
fn test_mismatched_block_widths_are_rejected() {
    let narrow = block(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let wide = Array2::from_shape_vec((7, 2), (0..14).map(|v| v as f64).collect()).unwrap();

    let forecaster = Forecaster::new(Persistence::new(7).unwrap(), 5).unwrap();
    let err = forecaster.forecast(&[narrow, wide]).unwrap_err();
    assert!(matches!(err, EvalError::DataError(_)));
}

#[test]
fn test_flatten_predictions_preserves_order() {
    let predictions = vec![
        ndarray::Array1::from_vec(vec![1.0, 2.0]),
        ndarray::Array1::from_vec(vec![3.0, 4.0]),
    ];

    assert_eq!(flatten_predictions(&predictions), vec![1.0, 2.0, 3.0, 4.0]);
}
