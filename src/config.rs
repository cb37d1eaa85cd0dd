use serde::{Deserialize, Serialize};

use crate::bandwidth::bandwidth_grid;

/// Central configuration for the bandwidth sweep.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SweepConfig {
    /// Smallest candidate bandwidth.
    pub h_min: f64,
    /// Largest candidate bandwidth.
    pub h_max: f64,
    /// Number of linearly spaced candidates between `h_min` and `h_max`.
    pub num_candidates: usize,
    /// Number of cross-validation folds.
    pub num_folds: usize,
    /// Seed for the fold permutation.
    pub seed: u64,
}

impl SweepConfig {
    /// Materialize the candidate grid described by this configuration.
    pub fn candidates(&self) -> Vec<f64> {
        bandwidth_grid(self.h_min, self.h_max, self.num_candidates)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            h_min: 0.1,
            h_max: 5.0,
            num_candidates: 50,
            num_folds: 10,
            seed: 42,
        }
    }
}
