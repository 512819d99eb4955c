//! Dataset loading and deterministic train/eval partitioning.
//!
//! The dataset is a fixed collection of named numeric feature vectors with a
//! binary label column. CSV loading is header-driven: the `diagnosis` column
//! carries the 0/1 label and every other column is a feature, in header order.
//! That order is the schema every later inference request must reproduce.
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::PipelineError;

/// Bundled breast-cancer style corpus the server trains on at startup.
const BUNDLED_CSV: &str = include_str!("../data/breast_cancer.csv");

/// Name of the label column in dataset CSV files.
pub const LABEL_COLUMN: &str = "diagnosis";

/// A fixed collection of (feature vector, label) pairs.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix, rows are samples and columns follow `feature_names`.
    pub x: Array2<f64>,
    /// Binary labels, 0 or 1, one per row of `x`.
    pub y: Array1<u8>,
    /// Feature names in column order; the inference schema.
    pub feature_names: Vec<String>,
}

impl Dataset {
    pub fn new(
        x: Array2<f64>,
        y: Array1<u8>,
        feature_names: Vec<String>,
    ) -> Result<Self, PipelineError> {
        if y.len() != x.nrows() {
            return Err(PipelineError::ShapeMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if feature_names.len() != x.ncols() {
            return Err(PipelineError::ShapeMismatch {
                expected: x.ncols(),
                got: feature_names.len(),
            });
        }
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(PipelineError::EmptyDataset);
        }
        Ok(Dataset { x, y, feature_names })
    }

    /// Load the dataset embedded in the crate.
    pub fn bundled() -> Result<Dataset> {
        Self::from_reader(BUNDLED_CSV.as_bytes()).context("failed to parse bundled dataset")
    }

    /// Read a dataset from a CSV file on disk.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let file = std::fs::File::open(&path)
            .with_context(|| format!("failed to open dataset: {}", path.as_ref().display()))?;
        Self::from_reader(file)
    }

    /// Read a dataset from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .context("failed to read dataset header row")?
            .clone();

        let label_idx = headers
            .iter()
            .position(|h| h == LABEL_COLUMN)
            .ok_or_else(|| anyhow!("missing label column '{}'", LABEL_COLUMN))?;

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != label_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut features = Vec::new();
        let mut labels = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("failed to read row {}", row_idx + 1))?;
            for (i, field) in record.iter().enumerate() {
                if i == label_idx {
                    let label: u8 = field
                        .parse()
                        .with_context(|| format!("invalid label at row {}", row_idx + 1))?;
                    if label > 1 {
                        bail!("label out of range at row {}: {}", row_idx + 1, label);
                    }
                    labels.push(label);
                } else {
                    let value: f64 = field.parse().with_context(|| {
                        format!("non-numeric value '{}' at row {}", field, row_idx + 1)
                    })?;
                    features.push(value);
                }
            }
        }

        let n_samples = labels.len();
        let x = Array2::from_shape_vec((n_samples, feature_names.len()), features)
            .context("ragged rows in dataset")?;
        Ok(Dataset::new(x, Array1::from_vec(labels), feature_names)?)
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Fraction of samples labeled 1.
    pub fn positive_rate(&self) -> f64 {
        let positives = self.y.iter().filter(|&&v| v == 1).count();
        positives as f64 / self.y.len() as f64
    }

    /// Partition into (train, eval) with a shuffled split.
    ///
    /// The partition is a pure function of (dataset, test_size, seed):
    /// re-running with identical inputs yields identical membership.
    pub fn split(&self, test_size: f64, seed: u64) -> Result<(Dataset, Dataset), PipelineError> {
        let n = self.n_samples();
        let n_eval = (n as f64 * test_size).round() as usize;

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (eval_idx, train_idx) = indices.split_at(n_eval.min(n));
        if train_idx.is_empty() || eval_idx.is_empty() {
            return Err(PipelineError::EmptySplit {
                train: train_idx.len(),
                eval: eval_idx.len(),
            });
        }

        Ok((self.select(train_idx), self.select(eval_idx)))
    }

    /// New dataset containing only the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
            feature_names: self.feature_names.clone(),
        }
    }

    pub fn log_summary(&self) {
        let positives = self.y.iter().filter(|&&v| v == 1).count();
        log::info!(
            "loaded {} samples ({} positive, {} negative) with {} features",
            self.n_samples(),
            positives,
            self.n_samples() - positives,
            self.n_features()
        );
    }
}
