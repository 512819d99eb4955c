use serde::{Deserialize, Serialize};

/// Central configuration for the one-shot pipeline build.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PipelineConfig {
    /// Fraction of the dataset held out for evaluation.
    pub test_size: f64,
    /// Seed for the shuffled train/eval partition. A fixed seed makes the
    /// partition reproducible across runs.
    pub seed: u64,
    pub model: ModelConfig,
}

/// Hyper-parameters for the logistic regression fit.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    pub learning_rate: f64,
    /// Bounded iteration cap for the optimizer. Hitting the cap is a warning,
    /// not an error; the best parameters found are kept.
    pub max_iter: usize,
    /// Convergence threshold on the gradient norm.
    pub tol: f64,
    /// L2 penalty strength applied to the weights (not the intercept).
    pub l2: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_size: 0.3,
            seed: 42,
            model: ModelConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iter: 10_000,
            tol: 1e-6,
            l2: 1e-4,
        }
    }
}
