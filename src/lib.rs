//! Binary perceptron classifier for two-feature labeled data
//!
//! Trains a linear decision rule with the classical online perceptron
//! update and scores it on held-out data.

pub mod api;
pub mod core;
pub mod data;
pub mod evaluation;
pub mod model;
pub mod report;
pub mod trainer;

// Re-export main types for convenience
pub use crate::api::{Perceptron, TrainedPerceptron};
pub use crate::core::error::*;
pub use crate::core::traits::Classifier;
pub use crate::core::types::*;
pub use crate::evaluation::{evaluate, EvaluationMetrics};
pub use crate::model::{step, ClassifierState};
pub use crate::report::{RunSummary, TestSummary};
pub use crate::trainer::{train, Trainer};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
