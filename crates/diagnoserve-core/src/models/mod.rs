//! Binary classifier implementations and their shared contract.
pub mod logistic;

pub use logistic::LogisticRegression;

use ndarray::{Array1, Array2};

/// Contract for binary classifiers used by the pipeline. Centralizing it here
/// keeps the pipeline code independent of the concrete model.
pub trait BinaryClassifier {
    /// Fit on (already scaled) features; `y` holds 0/1 labels.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<u8>);

    /// Raw linear scores (margins), one per row.
    fn decision_function(&self, x: &Array2<f64>) -> Array1<f64>;

    /// Positive-class probabilities in [0, 1], one per row.
    fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64>;

    /// Hard 0/1 labels; 1 exactly when the probability is >= 0.5.
    fn predict(&self, x: &Array2<f64>) -> Array1<u8>;

    fn name(&self) -> &str {
        "classifier"
    }
}
