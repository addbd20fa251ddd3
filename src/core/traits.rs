//! Core traits for the perceptron classifier

use crate::core::{Dataset, Label, PerceptronError, Record, Result};

/// Linear decision rule over fixed-width feature vectors
pub trait Classifier {
    /// Number of weights (expected feature dimensionality)
    fn dim(&self) -> usize;

    /// Weighted sum of the features plus bias, before the step function
    ///
    /// Callers must ensure `features.len() == self.dim()`.
    fn activation(&self, features: &[f64]) -> f64;

    /// Map an activation onto a class label
    fn decide(&self, activation: f64) -> Label;

    /// Predict the label of a single record
    fn predict(&self, record: &Record) -> Result<Label> {
        check_dim(self.dim(), record.features.len())?;
        Ok(self.decide(self.activation(&record.features)))
    }

    /// Predict every record of a dataset, in order
    fn predict_all(&self, dataset: &Dataset) -> Result<Vec<Label>> {
        check_dim(self.dim(), dataset.dim())?;
        Ok(dataset
            .iter()
            .map(|record| self.decide(self.activation(&record.features)))
            .collect())
    }
}

pub(crate) fn check_dim(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PerceptronError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
