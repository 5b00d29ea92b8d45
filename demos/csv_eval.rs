use forecast_eval::data::{flatten_blocks, train_test_split, PriceSeries};
use forecast_eval::evaluate;
use forecast_eval::models::persistence::Persistence;
use forecast_eval::walkforward::{flatten_predictions, WalkForward};

/// Evaluate the persistence baseline over a CSV of daily close prices.
///
/// Usage: csv_eval <path-to-csv> [block-len] [n-input]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: csv_eval <path-to-csv> [block-len] [n-input]")?;
    let block_len: usize = args.next().map(|v| v.parse()).transpose()?.unwrap_or(5);
    let n_input: usize = args.next().map(|v| v.parse()).transpose()?.unwrap_or(10);

    let series = PriceSeries::from_csv(&path)?;
    println!("Loaded {} closes from {}", series.len(), path);

    let blocks = series.to_weekly_blocks(block_len)?;
    let (train, test) = train_test_split(&blocks, 0.2);
    println!("{} training weeks, {} test weeks", train.len(), test.len());

    let runner = WalkForward::new(Persistence::new(block_len)?, n_input)?;
    let predictions = runner.run(&train, &test)?;

    let report = evaluate(
        &flatten_blocks(&test),
        &flatten_predictions(&predictions),
    )?;
    println!("{}", report);

    Ok(())
}
