//! Core type definitions for the perceptron classifier

use crate::core::{PerceptronError, Result};
use serde::Serialize;

/// Number of features carried by every record
pub const N_FEATURES: usize = 2;

/// Class label, expected to be either -1 or +1
pub type Label = i32;

/// Positive class label
pub const POSITIVE: Label = 1;

/// Negative class label
pub const NEGATIVE: Label = -1;

/// A single labeled observation with two real-valued features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Feature values `(x1, x2)`
    pub features: [f64; N_FEATURES],
    /// Class label (+1 or -1)
    pub label: Label,
}

impl Record {
    /// Create a new record
    pub fn new(x1: f64, x2: f64, label: Label) -> Self {
        Self {
            features: [x1, x2],
            label,
        }
    }

    /// First feature
    pub fn x1(&self) -> f64 {
        self.features[0]
    }

    /// Second feature
    pub fn x2(&self) -> f64 {
        self.features[1]
    }
}

/// Ordered, fixed-length collection of records
///
/// Once built, the dataset is never resized. Every record has exactly
/// [`N_FEATURES`] features, so the column invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from records in order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a dataset from parallel feature and label columns
    ///
    /// All three columns must have the same length.
    pub fn from_columns(x1: &[f64], x2: &[f64], labels: &[Label]) -> Result<Self> {
        let n_rows = labels.len();
        for column in [x1.len(), x2.len()] {
            if column != n_rows {
                return Err(PerceptronError::DimensionMismatch {
                    expected: n_rows,
                    actual: column,
                });
            }
        }

        let records = x1
            .iter()
            .zip(x2)
            .zip(labels)
            .map(|((&a, &b), &label)| Record::new(a, b, label))
            .collect();

        Ok(Self { records })
    }

    /// Number of rows in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of features (dimensionality)
    pub fn dim(&self) -> usize {
        N_FEATURES
    }

    /// Get a single record by index
    pub fn get(&self, i: usize) -> Option<&Record> {
        self.records.get(i)
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Get all labels in order
    pub fn labels(&self) -> Vec<Label> {
        self.records.iter().map(|r| r.label).collect()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Configuration for a training run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingConfig {
    /// Step size applied on every misclassification
    pub learning_rate: f64,
    /// Upper bound on the number of passes over the training data
    pub max_epochs: usize,
    /// Seed for weight initialization; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl TrainingConfig {
    /// Create a configuration without a fixed seed
    pub fn new(learning_rate: f64, max_epochs: usize) -> Self {
        Self {
            learning_rate,
            max_epochs,
            seed: None,
        }
    }

    /// Check that the learning rate is a positive finite number and
    /// that at least one epoch is allowed
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidParameter(format!(
                "learning rate must be a positive finite number, got: {}",
                self.learning_rate
            )));
        }
        if self.max_epochs == 0 {
            return Err(PerceptronError::InvalidParameter(
                "max epochs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_epochs: 100,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingOutcome {
    /// Number of epochs executed
    pub epochs_run: usize,
    /// Accuracy derived from the misclassification count of the last epoch
    pub training_accuracy: f64,
    /// Misclassifications observed during the last epoch
    pub misclassified: usize,
    /// Whether an epoch completed with zero misclassifications
    pub converged: bool,
    /// Misclassification count of every executed epoch, in order
    pub history: Vec<usize>,
}
