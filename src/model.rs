//! Classifier state: weight vector plus bias
//!
//! The state is created once with uniformly random parameters in `[-1, 1]`,
//! mutated by the [`Trainer`](crate::trainer::Trainer) during training and
//! treated as read-only afterwards.

use crate::core::{Classifier, Label, NEGATIVE, POSITIVE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Step function: `+1` when the activation is strictly positive, `-1` otherwise
///
/// An activation of exactly zero maps to `-1`.
pub fn step(activation: f64) -> Label {
    if activation > 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}

/// Weight vector and bias of a linear classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierState {
    weights: Vec<f64>,
    bias: f64,
}

impl ClassifierState {
    /// Create a state from explicit parameters
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Random initialization from the thread-local generator
    pub fn initialize(dim: usize) -> Self {
        Self::initialize_with_rng(dim, &mut rand::thread_rng())
    }

    /// Reproducible random initialization
    pub fn initialize_with_seed(dim: usize, seed: u64) -> Self {
        Self::initialize_with_rng(dim, &mut StdRng::seed_from_u64(seed))
    }

    /// Draw every weight, then the bias, independently from `[-1, 1]`
    pub fn initialize_with_rng<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Self {
        let weights = (0..dim).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias = rng.gen_range(-1.0..=1.0);
        Self { weights, bias }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Apply one perceptron correction towards `label` for `features`
    pub(crate) fn nudge(&mut self, features: &[f64], label: Label, learning_rate: f64) {
        let scale = learning_rate * f64::from(label);
        for (w, &x) in self.weights.iter_mut().zip(features) {
            *w += scale * x;
        }
        self.bias += scale;
    }
}

impl Classifier for ClassifierState {
    fn dim(&self) -> usize {
        self.weights.len()
    }

    fn activation(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }

    fn decide(&self, activation: f64) -> Label {
        step(activation)
    }
}
