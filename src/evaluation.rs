//! Accuracy scoring of predicted labels against ground truth

use crate::core::{Dataset, Label, PerceptronError, Result, POSITIVE};
use serde::Serialize;

/// Fraction of predictions that match the dataset labels
///
/// Fails with [`PerceptronError::DivisionUndefined`] on an empty dataset and
/// with [`PerceptronError::DimensionMismatch`] when `predictions` does not
/// have one entry per row.
pub fn evaluate(dataset: &Dataset, predictions: &[Label]) -> Result<f64> {
    check_lengths(dataset, predictions)?;
    if dataset.is_empty() {
        return Err(PerceptronError::DivisionUndefined);
    }

    let correct = dataset
        .iter()
        .zip(predictions)
        .filter(|(record, &predicted)| record.label == predicted)
        .count();

    Ok(correct as f64 / dataset.len() as f64)
}

fn check_lengths(dataset: &Dataset, predictions: &[Label]) -> Result<()> {
    if predictions.len() != dataset.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: dataset.len(),
            actual: predictions.len(),
        });
    }
    Ok(())
}

/// Confusion matrix with `+1` as the positive class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationMetrics {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl EvaluationMetrics {
    /// Tally predictions against the dataset labels
    pub fn from_predictions(dataset: &Dataset, predictions: &[Label]) -> Result<Self> {
        check_lengths(dataset, predictions)?;

        let mut metrics = Self {
            true_positives: 0,
            true_negatives: 0,
            false_positives: 0,
            false_negatives: 0,
        };

        for (record, &predicted) in dataset.iter().zip(predictions) {
            match (predicted == POSITIVE, record.label == POSITIVE) {
                (true, true) => metrics.true_positives += 1,
                (false, false) => metrics.true_negatives += 1,
                (true, false) => metrics.false_positives += 1,
                (false, true) => metrics.false_negatives += 1,
            }
        }

        Ok(metrics)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// (TP + TN) / total
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * (p * r) / (p + r)
        }
    }

    /// TN / (TN + FP)
    pub fn specificity(&self) -> f64 {
        ratio(self.true_negatives, self.true_negatives + self.false_positives)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
