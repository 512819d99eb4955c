//! Integration tests for the preprocessing module (StandardScaler).

use diagnoserve_core::error::PipelineError;
use diagnoserve_core::preprocessing::StandardScaler;
use ndarray::{array, Array2};

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

#[test]
fn fit_computes_mean_and_std() {
    let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];

    let scaler = StandardScaler::fit(&x).unwrap();
    assert!((scaler.mean()[0] - 2.5).abs() < 1e-12);
    assert!((scaler.mean()[1] - 25.0).abs() < 1e-12);
    assert!(scaler.std()[0] > 0.0);
    assert!(scaler.std()[1] > 0.0);
}

#[test]
fn fit_rejects_empty_matrix() {
    let x = Array2::<f64>::zeros((0, 3));
    assert_eq!(StandardScaler::fit(&x), Err(PipelineError::EmptyDataset));

    let x = Array2::<f64>::zeros((3, 0));
    assert_eq!(StandardScaler::fit(&x), Err(PipelineError::EmptyDataset));
}

#[test]
fn constant_column_gets_unit_scale() {
    let x = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];

    let scaler = StandardScaler::fit(&x).unwrap();
    assert_eq!(scaler.std()[0], 1.0, "zero-variance column falls back to 1");

    // Transforming the constant column yields 0, not NaN or infinity.
    let t = scaler.transform(&x);
    for r in 0..3 {
        assert_eq!(t[(r, 0)], 0.0);
        assert!(t[(r, 1)].is_finite());
    }
}

// ---------------------------------------------------------------------------
// Transforming
// ---------------------------------------------------------------------------

#[test]
fn transform_centers_and_scales() {
    let x = array![[1.0], [2.0], [3.0], [4.0]];

    let scaler = StandardScaler::fit(&x).unwrap();
    let t = scaler.transform(&x);

    let mean: f64 = (0..4).map(|r| t[(r, 0)]).sum::<f64>() / 4.0;
    let var: f64 = (0..4).map(|r| t[(r, 0)].powi(2)).sum::<f64>() / 4.0;
    assert!(mean.abs() < 1e-12, "column mean after transform = {}", mean);
    assert!((var - 1.0).abs() < 1e-9, "column variance after transform = {}", var);
}

#[test]
fn transform_is_pure_on_reapplication() {
    let x = array![[1.0, -3.0], [2.5, 0.5], [4.0, 7.0]];

    let scaler = StandardScaler::fit(&x).unwrap();
    let first = scaler.transform(&x);
    let second = scaler.transform(&x);
    assert_eq!(first, second, "same scaler and input must give same output");

    let row_first = scaler.transform_row(x.row(1)).unwrap();
    let row_second = scaler.transform_row(x.row(1)).unwrap();
    assert_eq!(row_first, row_second);
    // Single-row transform agrees with the matrix transform.
    for c in 0..2 {
        assert!((row_first[c] - first[(1, c)]).abs() < 1e-15);
    }
}

#[test]
fn transform_row_rejects_wrong_length() {
    let x = array![[1.0, 2.0], [3.0, 4.0]];
    let scaler = StandardScaler::fit(&x).unwrap();

    let bad = array![1.0, 2.0, 3.0];
    assert_eq!(
        scaler.transform_row(bad.view()),
        Err(PipelineError::ShapeMismatch { expected: 2, got: 3 })
    );
}
