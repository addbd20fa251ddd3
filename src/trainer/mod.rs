//! Online perceptron training
//!
//! Records are visited one at a time in dataset order. A misclassified
//! record immediately moves the weights and bias towards its label, so
//! later records in the same epoch see the corrected state:
//!
//! ```text
//! w[i] += learning_rate * y * x[i]
//! b    += learning_rate * y
//! ```
//!
//! Training stops at the first epoch without a misclassification, or when
//! the epoch budget runs out.

use crate::core::traits::check_dim;
use crate::core::{Classifier, Dataset, PerceptronError, Result, TrainingConfig, TrainingOutcome};
use crate::model::ClassifierState;
use log::{debug, info};

/// Perceptron trainer driven by a [`TrainingConfig`]
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    /// Create a new trainer with the given configuration
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Get the trainer configuration
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train `state` in place on `dataset`
    pub fn train(
        &self,
        state: &mut ClassifierState,
        dataset: &Dataset,
    ) -> Result<TrainingOutcome> {
        self.config.validate()?;
        if dataset.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }
        check_dim(state.dim(), dataset.dim())?;

        let learning_rate = self.config.learning_rate;
        let mut history = Vec::new();
        let mut misclassified = 0;

        for epoch in 0..self.config.max_epochs {
            misclassified = 0;

            for record in dataset {
                let prediction = state.decide(state.activation(&record.features));
                if prediction != record.label {
                    state.nudge(&record.features, record.label, learning_rate);
                    misclassified += 1;
                }
            }

            debug!("Epoch {epoch}, misclassified: {misclassified}");
            history.push(misclassified);

            if misclassified == 0 {
                break;
            }
        }

        let epochs_run = history.len();
        let converged = misclassified == 0;
        let training_accuracy = if converged {
            1.0
        } else {
            (dataset.len() - misclassified) as f64 / dataset.len() as f64
        };

        if converged {
            info!("Converged after {epochs_run} epochs");
        } else {
            info!(
                "Epoch budget of {} exhausted with {misclassified} misclassifications in the last epoch",
                self.config.max_epochs
            );
        }

        Ok(TrainingOutcome {
            epochs_run,
            training_accuracy,
            misclassified,
            converged,
            history,
        })
    }
}

/// Train `state` in place with an explicit learning rate and epoch budget
pub fn train(
    state: &mut ClassifierState,
    dataset: &Dataset,
    learning_rate: f64,
    max_epochs: usize,
) -> Result<TrainingOutcome> {
    Trainer::new(TrainingConfig::new(learning_rate, max_epochs)).train(state, dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use approx::assert_relative_eq;

    fn separable() -> Dataset {
        Dataset::from_records(vec![
            Record::new(0.0, 0.0, -1),
            Record::new(0.0, 1.0, -1),
            Record::new(1.0, 0.0, 1),
            Record::new(1.0, 1.0, 1),
        ])
    }

    #[test]
    fn test_already_separating_state_stops_after_one_epoch() {
        let mut state = ClassifierState::new(vec![1.0, 0.0], -0.5);
        let outcome = train(&mut state, &separable(), 0.1, 50).unwrap();

        assert_eq!(outcome.epochs_run, 1);
        assert_eq!(outcome.history, vec![0]);
        assert!(outcome.converged);
        assert_eq!(outcome.training_accuracy, 1.0);
        assert_eq!(state, ClassifierState::new(vec![1.0, 0.0], -0.5));
    }

    #[test]
    fn test_update_rule_by_hand() {
        // Zero activation is a -1 prediction, so the first pass corrects once.
        let dataset = Dataset::from_records(vec![Record::new(1.0, 0.0, 1)]);
        let mut state = ClassifierState::new(vec![0.0, 0.0], 0.0);

        let outcome = train(&mut state, &dataset, 0.5, 10).unwrap();

        assert_relative_eq!(state.weights()[0], 0.5);
        assert_relative_eq!(state.weights()[1], 0.0);
        assert_relative_eq!(state.bias(), 0.5);
        assert_eq!(outcome.history, vec![1, 0]);
        assert_eq!(outcome.epochs_run, 2);
        assert_eq!(outcome.training_accuracy, 1.0);
    }

    #[test]
    fn test_updates_are_visible_within_an_epoch() {
        // The correction made on the first record already classifies the
        // second one, so only one mistake is counted.
        let dataset = Dataset::from_records(vec![
            Record::new(1.0, 0.0, 1),
            Record::new(2.0, 0.0, 1),
        ]);
        let mut state = ClassifierState::new(vec![0.0, 0.0], 0.0);

        let outcome = train(&mut state, &dataset, 1.0, 1).unwrap();
        assert_eq!(outcome.history, vec![1]);
    }

    #[test]
    fn test_accuracy_uses_last_epoch_count() {
        // One epoch: the single record is misclassified, then corrected.
        // The reported accuracy reflects the pass, not the corrected state.
        let dataset = Dataset::from_records(vec![Record::new(1.0, 0.0, 1)]);
        let mut state = ClassifierState::new(vec![0.0, 0.0], 0.0);

        let outcome = train(&mut state, &dataset, 0.5, 1).unwrap();

        assert_eq!(outcome.epochs_run, 1);
        assert!(!outcome.converged);
        assert_eq!(outcome.misclassified, 1);
        assert_eq!(outcome.training_accuracy, 0.0);
        assert_eq!(state.predict_all(&dataset).unwrap(), vec![1]);
    }

    #[test]
    fn test_non_separable_exhausts_budget() {
        let dataset = Dataset::from_records(vec![
            Record::new(1.0, 1.0, 1),
            Record::new(1.0, 1.0, -1),
            Record::new(0.0, 0.0, -1),
        ]);
        let mut state = ClassifierState::initialize_with_seed(2, 7);

        let outcome = train(&mut state, &dataset, 0.1, 5).unwrap();

        assert_eq!(outcome.epochs_run, 5);
        assert_eq!(outcome.history.len(), 5);
        assert!(outcome.history.iter().all(|&m| m > 0));
        assert!(outcome.training_accuracy < 1.0);
    }

    #[test]
    fn test_halts_at_first_clean_epoch() {
        let mut state = ClassifierState::initialize_with_seed(2, 3);
        let outcome = train(&mut state, &separable(), 0.1, 50).unwrap();

        let (last, earlier) = outcome.history.split_last().unwrap();
        assert_eq!(*last, 0);
        assert!(earlier.iter().all(|&m| m > 0));
    }

    #[test]
    fn test_precondition_violations() {
        let mut state = ClassifierState::new(vec![0.0, 0.0], 0.0);
        assert!(matches!(
            train(&mut state, &Dataset::default(), 0.1, 5),
            Err(PerceptronError::EmptyDataset)
        ));

        let mut wide = ClassifierState::new(vec![0.0; 3], 0.0);
        assert!(matches!(
            train(&mut wide, &separable(), 0.1, 5),
            Err(PerceptronError::DimensionMismatch { .. })
        ));

        assert!(matches!(
            train(&mut state, &separable(), 0.0, 5),
            Err(PerceptronError::InvalidParameter(_))
        ));
        assert!(matches!(
            train(&mut state, &separable(), 0.1, 0),
            Err(PerceptronError::InvalidParameter(_))
        ));
        assert_eq!(state, ClassifierState::new(vec![0.0, 0.0], 0.0));
    }

    #[test]
    fn test_trainer_config_accessor() {
        let trainer = Trainer::new(TrainingConfig::new(0.25, 12));
        assert_eq!(trainer.config().learning_rate, 0.25);
        assert_eq!(trainer.config().max_epochs, 12);
    }
}
