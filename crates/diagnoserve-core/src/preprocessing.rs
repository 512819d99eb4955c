//! Feature standardization fitted on training data only.
//!
//! The scaler computes per-column mean and standard deviation once, at fit
//! time, and applies the same statistics to every later matrix or single-row
//! transform. It never refits.
use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::PipelineError;

/// Per-column standardization statistics (mean / std), fit once.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Columns whose stddev falls below this are treated as constant and get
    /// a scale of 1.0 instead of dividing by zero.
    const STD_EPS: f64 = 1e-12;

    /// Compute per-column statistics from a training matrix.
    pub fn fit(x: &Array2<f64>) -> Result<Self, PipelineError> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(PipelineError::EmptyDataset);
        }

        let mean = x.mean_axis(Axis(0)).ok_or(PipelineError::EmptyDataset)?;
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s <= Self::STD_EPS { 1.0 } else { s });

        Ok(StandardScaler { mean, std })
    }

    /// Standardize every row of `x` with the fitted statistics.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mean) / &self.std
    }

    /// Standardize a single feature vector in schema order.
    pub fn transform_row(&self, row: ArrayView1<f64>) -> Result<Array1<f64>, PipelineError> {
        if row.len() != self.mean.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: self.mean.len(),
                got: row.len(),
            });
        }
        Ok((&row - &self.mean) / &self.std)
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }
}
