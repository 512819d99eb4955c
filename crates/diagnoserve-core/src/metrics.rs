//! Evaluation metrics for binary classifiers.
use std::collections::BTreeMap;

use ndarray::Array1;
use serde::Serialize;

/// 2x2 confusion counts; rows index the true class, columns the predicted
/// class, so `matrix[1][0]` counts false negatives.
pub type ConfusionMatrix = [[usize; 2]; 2];

pub fn accuracy(y_true: &Array1<u8>, y_pred: &Array1<u8>) -> f64 {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "accuracy requires arrays of equal length"
    );
    assert!(!y_true.is_empty(), "accuracy requires at least one sample");
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / y_true.len() as f64
}

pub fn confusion_matrix(y_true: &Array1<u8>, y_pred: &Array1<u8>) -> ConfusionMatrix {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "confusion matrix requires arrays of equal length"
    );
    let mut matrix = [[0usize; 2]; 2];
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        matrix[t as usize][p as usize] += 1;
    }
    matrix
}

/// Precision/recall/F1/support for one class (or one averaging row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: usize,
}

/// Per-class metrics plus macro and support-weighted averages.
///
/// Serializes to the flat map shape `{"0": {...}, "1": {...}, "accuracy": a,
/// "macro avg": {...}, "weighted avg": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    #[serde(flatten)]
    pub classes: BTreeMap<String, ClassMetrics>,
    pub accuracy: f64,
    #[serde(rename = "macro avg")]
    pub macro_avg: ClassMetrics,
    #[serde(rename = "weighted avg")]
    pub weighted_avg: ClassMetrics,
}

fn class_metrics(matrix: &ConfusionMatrix, class: usize) -> ClassMetrics {
    let tp = matrix[class][class];
    let predicted = matrix[0][class] + matrix[1][class];
    let actual = matrix[class][0] + matrix[class][1];

    let precision = if predicted > 0 {
        tp as f64 / predicted as f64
    } else {
        0.0
    };
    let recall = if actual > 0 {
        tp as f64 / actual as f64
    } else {
        0.0
    };
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics {
        precision,
        recall,
        f1_score,
        support: actual,
    }
}

pub fn classification_report(y_true: &Array1<u8>, y_pred: &Array1<u8>) -> ClassificationReport {
    let matrix = confusion_matrix(y_true, y_pred);
    let total = y_true.len();

    let per_class: Vec<ClassMetrics> = (0..2).map(|c| class_metrics(&matrix, c)).collect();

    let macro_avg = ClassMetrics {
        precision: per_class.iter().map(|m| m.precision).sum::<f64>() / 2.0,
        recall: per_class.iter().map(|m| m.recall).sum::<f64>() / 2.0,
        f1_score: per_class.iter().map(|m| m.f1_score).sum::<f64>() / 2.0,
        support: total,
    };

    let weighted = |field: fn(&ClassMetrics) -> f64| -> f64 {
        per_class
            .iter()
            .map(|m| field(m) * m.support as f64)
            .sum::<f64>()
            / total as f64
    };
    let weighted_avg = ClassMetrics {
        precision: weighted(|m| m.precision),
        recall: weighted(|m| m.recall),
        f1_score: weighted(|m| m.f1_score),
        support: total,
    };

    let classes = per_class
        .into_iter()
        .enumerate()
        .map(|(c, m)| (c.to_string(), m))
        .collect();

    ClassificationReport {
        classes,
        accuracy: accuracy(y_true, y_pred),
        macro_avg,
        weighted_avg,
    }
}
