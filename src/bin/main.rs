//! Perceptron Command Line Interface
//!
//! Trains a perceptron on a training CSV file and reports its accuracy on
//! a test CSV file.

use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use perceptron::{
    evaluate, Classifier, ClassifierState, Dataset, EvaluationMetrics, Label, Perceptron,
    PerceptronError, Result, RunSummary, TestSummary, TrainedPerceptron, TrainingConfig,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "perceptron")]
#[command(about = "Train and evaluate a binary perceptron classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Learning rate applied on every misclassification
    learning_rate: f64,

    /// Maximum number of training iterations (epochs)
    max_iterations: usize,

    /// Debug prints: any non-zero value dumps rows, predictions and per-epoch counts
    #[arg(default_value_t = 0)]
    debug_prints: i32,

    /// Training data file
    #[arg(long, default_value = "training_data.csv")]
    train_data: PathBuf,

    /// Test data file; evaluation is skipped when it cannot be read
    #[arg(long, default_value = "test_data.csv")]
    test_data: PathBuf,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON run summary instead of the text report
    #[arg(long)]
    json: bool,
}

/// Reporting switches, passed explicitly to every printing function
#[derive(Debug, Clone, Copy)]
struct ReportOptions {
    debug: bool,
    json: bool,
}

impl ReportOptions {
    fn text(&self) -> bool {
        !self.json
    }
}

fn main() {
    let cli = Cli::parse();

    let options = ReportOptions {
        debug: cli.debug_prints != 0,
        json: cli.json,
    };

    let log_level = if options.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli, options) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli, options: ReportOptions) -> Result<()> {
    let started_at = Utc::now();
    if options.text() {
        println!("\n=== Starting new perceptron training run ===");
    }

    info!("Loading training data from {:?}", cli.train_data);
    let train_data = Dataset::from_csv_file(&cli.train_data)?;
    if options.text() {
        println!("--- ---\n\nTrain data successfully read.\nRows: {}", train_data.len());
    }
    print_rows(options, "train", &train_data);

    let mut config = TrainingConfig::new(cli.learning_rate, cli.max_iterations);
    config.seed = cli.seed;
    info!(
        "Parameters: learning_rate={}, max_iterations={}, seed={:?}",
        config.learning_rate, config.max_epochs, config.seed
    );

    let model = Perceptron::with_config(config).train(&train_data)?;
    print_training(options, &model);

    let test = match load_test_data(&cli.test_data)? {
        Some(test_data) => Some(run_test_phase(options, &model, &test_data)?),
        None => None,
    };

    if options.json {
        let summary = RunSummary::new(started_at, train_data.len(), &model, test);
        summary.write_json(std::io::stdout().lock())?;
    }

    Ok(())
}

/// Load the test set, or `None` when it is unavailable or has no rows
fn load_test_data(path: &Path) -> Result<Option<Dataset>> {
    match Dataset::from_csv_file(path) {
        Ok(dataset) => Ok(Some(dataset)),
        Err(PerceptronError::IoError(e)) => {
            warn!("Can't open test file {path:?} ({e}), skipping evaluation");
            Ok(None)
        }
        Err(PerceptronError::EmptyDataset) => {
            warn!("Test file {path:?} has no rows, skipping evaluation");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn run_test_phase(
    options: ReportOptions,
    model: &TrainedPerceptron,
    test_data: &Dataset,
) -> Result<TestSummary> {
    if options.text() {
        println!("Test data successfully read.\nRows: {}", test_data.len());
    }
    print_rows(options, "test", test_data);

    let predictions = model.state().predict_all(test_data)?;
    let accuracy = evaluate(test_data, &predictions)?;
    let metrics = EvaluationMetrics::from_predictions(test_data, &predictions)?;

    if options.text() {
        println!(
            "-----\n\nTest phase ended\nPrediction Accuracy = {:.4}\n\n--- ---",
            accuracy * 100.0
        );
    }
    print_predictions(options, test_data, &predictions);

    Ok(TestSummary {
        rows: test_data.len(),
        accuracy,
        metrics,
    })
}

fn print_training(options: ReportOptions, model: &TrainedPerceptron) {
    if !options.text() {
        return;
    }
    let outcome = model.outcome();
    let config = model.config();
    let state: &ClassifierState = model.state();

    println!(
        "---\n\nTraining phase completed\nAccuracy={:.4} \nTotal Training Iterations={}\n",
        outcome.training_accuracy * 100.0,
        outcome.epochs_run
    );
    println!(
        "Learning Rate: {:.6}\nMax Iterations: {}",
        config.learning_rate, config.max_epochs
    );
    let weights: Vec<String> = state.weights().iter().map(|w| format!("{w:.10}")).collect();
    println!(
        "Weights: {}\nBias: {:.10}\n---\n",
        weights.join(", "),
        state.bias()
    );
    if options.debug {
        println!("Misclassifications per epoch: {:?}", outcome.history);
    }
}

fn print_rows(options: ReportOptions, name: &str, dataset: &Dataset) {
    if !(options.debug && options.text()) {
        return;
    }
    println!("Printing {name} data");
    for (i, record) in dataset.iter().enumerate() {
        println!(
            "Row {i}: x1={:.4}, x2={:.4}, label={}",
            record.x1(),
            record.x2(),
            record.label
        );
    }
}

fn print_predictions(options: ReportOptions, dataset: &Dataset, predictions: &[Label]) {
    if !(options.debug && options.text()) {
        return;
    }
    println!("Printing predictions");
    for (i, (record, predicted)) in dataset.iter().zip(predictions).enumerate() {
        println!("Row {i}: label={}, predicted={predicted}", record.label);
    }
}
