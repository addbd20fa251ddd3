//! Run summaries
//!
//! A [`RunSummary`] captures what a single train/evaluate run produced so
//! the command-line tool can emit it as JSON. It is a report only and is
//! never read back as a model.

use crate::api::TrainedPerceptron;
use crate::core::{PerceptronError, Result, TrainingConfig, TrainingOutcome};
use crate::evaluation::EvaluationMetrics;
use crate::model::ClassifierState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Test-phase section of a run summary
#[derive(Debug, Clone, Serialize)]
pub struct TestSummary {
    pub rows: usize,
    pub accuracy: f64,
    pub metrics: EvaluationMetrics,
}

/// Everything reported about one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub library_version: String,
    pub started_at: DateTime<Utc>,
    pub training_rows: usize,
    pub config: TrainingConfig,
    pub outcome: TrainingOutcome,
    pub state: ClassifierState,
    /// `None` when no test set was available
    pub test: Option<TestSummary>,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Utc>,
        training_rows: usize,
        model: &TrainedPerceptron,
        test: Option<TestSummary>,
    ) -> Self {
        Self {
            library_version: crate::VERSION.to_string(),
            started_at,
            training_rows,
            config: model.config().clone(),
            outcome: model.outcome().clone(),
            state: model.state().clone(),
            test,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PerceptronError::SerializationError(e.to_string()))
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.to_json()?)?;
        Ok(())
    }
}
