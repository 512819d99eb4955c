//! Logistic regression fitted by batch gradient descent.
use ndarray::{Array1, Array2};

use crate::config::ModelConfig;
use crate::models::BinaryClassifier;

/// Linear binary classifier with a sigmoid probability mapping.
///
/// Fitting minimizes the mean logistic loss (plus an optional L2 penalty on
/// the weights) by full-batch gradient descent, stopping when the gradient
/// norm drops below `tol` or after `max_iter` iterations. Hitting the cap
/// logs a warning and keeps the parameters reached so far.
pub struct LogisticRegression {
    params: ModelConfig,
    weights: Array1<f64>,
    intercept: f64,
    converged: bool,
    n_iter: usize,
}

impl LogisticRegression {
    pub fn new(params: ModelConfig) -> Self {
        LogisticRegression {
            params,
            weights: Array1::zeros(0),
            intercept: 0.0,
            converged: false,
            n_iter: 0,
        }
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }
}

impl BinaryClassifier for LogisticRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<u8>) {
        let (n_samples, n_features) = x.dim();
        assert!(
            n_samples > 0 && n_features > 0,
            "fit requires a non-empty matrix"
        );
        assert_eq!(
            n_samples,
            y.len(),
            "fit requires one label per sample"
        );

        let y_f = y.mapv(|v| v as f64);
        let n_f = n_samples as f64;
        let lr = self.params.learning_rate;

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut intercept = 0.0f64;
        self.converged = false;

        let mut iter = 0;
        while iter < self.params.max_iter {
            let scores = x.dot(&weights) + intercept;
            let probs = scores.mapv(Self::sigmoid);
            let residual = &probs - &y_f;

            let mut grad_w = x.t().dot(&residual) / n_f;
            if self.params.l2 > 0.0 {
                grad_w += &(&weights * (self.params.l2 / n_f));
            }
            let grad_b = residual.sum() / n_f;

            let grad_norm = (grad_w.dot(&grad_w) + grad_b * grad_b).sqrt();
            if grad_norm < self.params.tol {
                self.converged = true;
                break;
            }

            weights.scaled_add(-lr, &grad_w);
            intercept -= lr * grad_b;
            iter += 1;
        }

        if !self.converged {
            log::warn!(
                "logistic regression did not converge within {} iterations; keeping current parameters",
                self.params.max_iter
            );
        }

        self.weights = weights;
        self.intercept = intercept;
        self.n_iter = iter;
    }

    fn decision_function(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.weights) + self.intercept
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64> {
        self.decision_function(x).mapv(Self::sigmoid)
    }

    fn predict(&self, x: &Array2<f64>) -> Array1<u8> {
        self.predict_proba(x).mapv(|p| u8::from(p >= 0.5))
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
