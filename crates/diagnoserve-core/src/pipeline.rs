//! One-shot pipeline build and the immutable fitted state served afterwards.
//!
//! [`build`] is the single initialization point: it splits the dataset, fits
//! the scaler on the training split only, fits the classifier on the scaled
//! training split, and retains the held-out evaluation split. The returned
//! [`FittedPipeline`] is read-only; rebuilding requires a process restart.
use std::collections::HashMap;

use ndarray::{Array1, Axis};
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::dataset::Dataset;
use crate::error::PipelineError;
use crate::metrics::{self, ClassificationReport, ConfusionMatrix};
use crate::models::{BinaryClassifier, LogisticRegression};
use crate::preprocessing::StandardScaler;

/// Outcome of a single prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: u8,
    pub probability: f64,
}

/// Metrics computed on the held-out evaluation split.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub classification_report: ClassificationReport,
}

/// Scaler + classifier + evaluation split, built once per process.
///
/// Immutable after build, so any number of concurrent readers may call
/// [`FittedPipeline::predict`] and [`FittedPipeline::evaluate`] without
/// coordination.
pub struct FittedPipeline {
    feature_names: Vec<String>,
    scaler: StandardScaler,
    model: LogisticRegression,
    eval: Dataset,
}

/// Build a fitted pipeline from a dataset. Pure function of its inputs given
/// the seed; any failure here is fatal to startup.
pub fn build(dataset: Dataset, config: &PipelineConfig) -> Result<FittedPipeline, PipelineError> {
    if dataset.n_samples() == 0 || dataset.n_features() == 0 {
        return Err(PipelineError::EmptyDataset);
    }
    dataset.log_summary();

    let (train, eval) = dataset.split(config.test_size, config.seed)?;

    let scaler = StandardScaler::fit(&train.x)?;
    let x_train = scaler.transform(&train.x);

    let mut model = LogisticRegression::new(config.model.clone());
    model.fit(&x_train, &train.y);

    log::info!(
        "fitted {} on {} training samples in {} iterations ({} evaluation samples held out)",
        model.name(),
        train.n_samples(),
        model.n_iter(),
        eval.n_samples()
    );

    Ok(FittedPipeline {
        feature_names: train.feature_names,
        scaler,
        model,
        eval,
    })
}

impl FittedPipeline {
    /// The trained feature schema, in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn evaluation_set(&self) -> &Dataset {
        &self.eval
    }

    /// Transform and score a single named feature vector.
    ///
    /// The map must contain exactly the trained feature names; anything else
    /// is a [`PipelineError::SchemaMismatch`], never silently padded or
    /// truncated.
    pub fn predict(&self, features: &HashMap<String, f64>) -> Result<Prediction, PipelineError> {
        let row = self.resolve_features(features)?;
        let scaled = self.scaler.transform_row(row.view())?;

        let x = scaled.insert_axis(Axis(0));
        let probability = self.model.predict_proba(&x)[0];

        Ok(Prediction {
            label: u8::from(probability >= 0.5),
            probability,
        })
    }

    /// Score the held-out evaluation split.
    ///
    /// Infallible: an empty evaluation split is rejected at build time.
    pub fn evaluate(&self) -> Evaluation {
        let x = self.scaler.transform(&self.eval.x);
        let y_pred = self.model.predict(&x);

        Evaluation {
            accuracy: metrics::accuracy(&self.eval.y, &y_pred),
            confusion_matrix: metrics::confusion_matrix(&self.eval.y, &y_pred),
            classification_report: metrics::classification_report(&self.eval.y, &y_pred),
        }
    }

    /// Order the named features into schema order, rejecting any mismatch.
    fn resolve_features(
        &self,
        features: &HashMap<String, f64>,
    ) -> Result<Array1<f64>, PipelineError> {
        let missing: Vec<String> = self
            .feature_names
            .iter()
            .filter(|name| !features.contains_key(*name))
            .cloned()
            .collect();

        let mut unexpected: Vec<String> = features
            .keys()
            .filter(|key| !self.feature_names.contains(*key))
            .cloned()
            .collect();
        unexpected.sort();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(PipelineError::SchemaMismatch { missing, unexpected });
        }

        Ok(self
            .feature_names
            .iter()
            .map(|name| features[name.as_str()])
            .collect())
    }
}
