use forecast_eval::data::{flatten_blocks, train_test_split, PriceSeries};
use forecast_eval::evaluate;
use forecast_eval::models::persistence::Persistence;
use forecast_eval::models::window_mean::WindowMean;
use forecast_eval::models::PredictiveModel;
use forecast_eval::report::write_comparison_csv;
use forecast_eval::walkforward::{flatten_predictions, WalkForward};
use ndarray::Array2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Forecast Eval: Walk-Forward Baseline Comparison");
    println!("===============================================\n");

    // Two years of synthetic trading weeks, 5 sessions each
    println!("Generating sample data...");
    let series = PriceSeries::synthetic_random_walk(104 * 5, 100.0, 0.02, 7)?;
    let blocks = series.to_weekly_blocks(5)?;
    let (train, test) = train_test_split(&blocks, 0.2);
    println!(
        "Sample data created: {} training weeks, {} test weeks\n",
        train.len(),
        test.len()
    );

    let actual = flatten_blocks(&test);
    let test_dates = &series.dates()[series.len() - actual.len()..];

    // Walk forward with each baseline standing in for a trained model
    let persistence_preds = run_model(Persistence::new(5)?, &train, &test, &actual)?;
    run_model(WindowMean::new(5)?, &train, &test, &actual)?;

    // Comparison series for external charting
    let out_path = "walk_forward_comparison.csv";
    write_comparison_csv(
        out_path,
        test_dates,
        &actual,
        &persistence_preds,
        Some("persistence"),
    )?;
    println!("Comparison series written to {}", out_path);

    Ok(())
}

fn run_model<M: PredictiveModel>(
    model: M,
    train: &[Array2<f64>],
    test: &[Array2<f64>],
    actual: &[f64],
) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let name = model.name().to_string();
    let runner = WalkForward::new(model, 10)?;

    let predictions = runner.run(train, test)?;
    let flat = flatten_predictions(&predictions);

    let report = evaluate(actual, &flat)?;
    println!("{}", name);
    println!("{}", report);
    println!("as JSON: {}\n", serde_json::to_string(&report)?);

    Ok(flat)
}
