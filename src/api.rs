//! High-level API for perceptron training and evaluation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use perceptron::api::Perceptron;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = Perceptron::new()
//!     .with_learning_rate(0.1)
//!     .with_max_epochs(50)
//!     .with_seed(7)
//!     .train_from_csv("training_data.csv")?;
//!
//! println!("Epochs run: {}", model.outcome().epochs_run);
//! println!("Accuracy: {:.2}%", model.evaluate_from_csv("test_data.csv")? * 100.0);
//! # Ok(())
//! # }
//! ```

use crate::core::{Classifier, Dataset, Label, Record, Result, TrainingConfig, TrainingOutcome};
use crate::evaluation::{evaluate, EvaluationMetrics};
use crate::model::ClassifierState;
use crate::trainer::Trainer;
use std::path::Path;

/// Perceptron builder
#[derive(Debug, Clone, Default)]
pub struct Perceptron {
    config: TrainingConfig,
}

impl Perceptron {
    /// Create a perceptron with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a perceptron from an existing configuration
    pub fn with_config(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.config.max_epochs = max_epochs;
        self
    }

    /// Fix the seed used to initialize the weights
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Initialize a fresh state and train it on a dataset
    pub fn train(self, dataset: &Dataset) -> Result<TrainedPerceptron> {
        let state = match self.config.seed {
            Some(seed) => ClassifierState::initialize_with_seed(dataset.dim(), seed),
            None => ClassifierState::initialize(dataset.dim()),
        };
        self.train_from_state(state, dataset)
    }

    /// Train starting from the given state
    pub fn train_from_state(
        self,
        mut state: ClassifierState,
        dataset: &Dataset,
    ) -> Result<TrainedPerceptron> {
        let initial = state.clone();
        let outcome = Trainer::new(self.config.clone()).train(&mut state, dataset)?;
        Ok(TrainedPerceptron {
            state,
            initial,
            outcome,
            config: self.config,
        })
    }

    /// Train from a CSV file
    pub fn train_from_csv<P: AsRef<Path>>(self, path: P) -> Result<TrainedPerceptron> {
        let dataset = Dataset::from_csv_file(path)?;
        self.train(&dataset)
    }
}

/// A trained perceptron; its state is read-only from here on
#[derive(Debug, Clone)]
pub struct TrainedPerceptron {
    state: ClassifierState,
    initial: ClassifierState,
    outcome: TrainingOutcome,
    config: TrainingConfig,
}

impl TrainedPerceptron {
    /// Predict a single record
    pub fn predict(&self, record: &Record) -> Result<Label> {
        self.state.predict(record)
    }

    /// Predict every record of a dataset
    pub fn predict_all(&self, dataset: &Dataset) -> Result<Vec<Label>> {
        self.state.predict_all(dataset)
    }

    /// Predict from a CSV file
    pub fn predict_from_csv<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Label>> {
        let dataset = Dataset::from_csv_file(path)?;
        self.predict_all(&dataset)
    }

    /// Accuracy on a dataset
    pub fn evaluate(&self, dataset: &Dataset) -> Result<f64> {
        let predictions = self.predict_all(dataset)?;
        evaluate(dataset, &predictions)
    }

    /// Accuracy on a CSV file
    pub fn evaluate_from_csv<P: AsRef<Path>>(&self, path: P) -> Result<f64> {
        let dataset = Dataset::from_csv_file(path)?;
        self.evaluate(&dataset)
    }

    /// Confusion matrix on a dataset
    pub fn evaluate_detailed(&self, dataset: &Dataset) -> Result<EvaluationMetrics> {
        let predictions = self.predict_all(dataset)?;
        EvaluationMetrics::from_predictions(dataset, &predictions)
    }

    /// Final weights and bias
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Weights and bias before training
    pub fn initial_state(&self) -> &ClassifierState {
        &self.initial
    }

    pub fn outcome(&self) -> &TrainingOutcome {
        &self.outcome
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Train with the given parameters on one file and report the test accuracy
    /// on another
    pub fn evaluate_split<P1: AsRef<Path>, P2: AsRef<Path>>(
        train_path: P1,
        test_path: P2,
        learning_rate: f64,
        max_epochs: usize,
    ) -> Result<f64> {
        let model = Perceptron::new()
            .with_learning_rate(learning_rate)
            .with_max_epochs(max_epochs)
            .train_from_csv(train_path)?;
        model.evaluate_from_csv(test_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PerceptronError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn separable() -> Dataset {
        Dataset::from_records(vec![
            Record::new(0.0, 0.0, -1),
            Record::new(0.0, 1.0, -1),
            Record::new(1.0, 0.0, 1),
            Record::new(1.0, 1.0, 1),
        ])
    }

    #[test]
    fn test_builder_pattern() {
        let perceptron = Perceptron::new()
            .with_learning_rate(0.5)
            .with_max_epochs(25)
            .with_seed(9);

        assert_eq!(perceptron.config().learning_rate, 0.5);
        assert_eq!(perceptron.config().max_epochs, 25);
        assert_eq!(perceptron.config().seed, Some(9));
    }

    #[test]
    fn test_train_and_predict() {
        let model = Perceptron::new()
            .with_max_epochs(50)
            .with_seed(1)
            .train(&separable())
            .expect("Training should succeed");

        assert!(model.outcome().converged);
        assert_eq!(model.predict(&Record::new(1.0, 0.5, 1)).unwrap(), 1);
        assert_eq!(model.evaluate(&separable()).unwrap(), 1.0);
        assert_eq!(
            model.initial_state(),
            &ClassifierState::initialize_with_seed(2, 1)
        );
    }

    #[test]
    fn test_train_from_state() {
        let start = ClassifierState::new(vec![1.0, 0.0], -0.5);
        let model = Perceptron::new()
            .train_from_state(start.clone(), &separable())
            .unwrap();

        assert_eq!(model.state(), &start);
        assert_eq!(model.outcome().epochs_run, 1);
    }

    #[test]
    fn test_evaluate_detailed() {
        let model = Perceptron::new()
            .train_from_state(ClassifierState::new(vec![1.0, 0.0], -0.5), &separable())
            .unwrap();
        let metrics = model.evaluate_detailed(&separable()).unwrap();

        assert_eq!(metrics.true_positives, 2);
        assert_eq!(metrics.true_negatives, 2);
        assert_eq!(metrics.accuracy(), 1.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Perceptron::new()
            .with_learning_rate(-1.0)
            .train(&separable());
        assert!(matches!(result, Err(PerceptronError::InvalidParameter(_))));
    }

    #[test]
    fn test_file_operations() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").expect("Failed to create temp file");
        writeln!(temp_file, "x1,x2,label").expect("Failed to write");
        writeln!(temp_file, "0,0,-1").expect("Failed to write");
        writeln!(temp_file, "0,1,-1").expect("Failed to write");
        writeln!(temp_file, "1,0,1").expect("Failed to write");
        writeln!(temp_file, "1,1,1").expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let model = Perceptron::new()
            .with_max_epochs(50)
            .with_seed(5)
            .train_from_csv(temp_file.path())
            .expect("Training should succeed");

        let predictions = model.predict_from_csv(temp_file.path()).unwrap();
        assert_eq!(predictions, vec![-1, -1, 1, 1]);
        assert_eq!(model.evaluate_from_csv(temp_file.path()).unwrap(), 1.0);

        let accuracy = quick::evaluate_split(temp_file.path(), temp_file.path(), 0.1, 50)
            .expect("Quick evaluation should succeed");
        assert_eq!(accuracy, 1.0);
    }
}
