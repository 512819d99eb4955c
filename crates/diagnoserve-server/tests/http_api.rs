//! Handler tests against an in-process service with a real fitted pipeline.

use std::collections::HashMap;

use actix_web::{test, web, App};
use serde_json::Value;

use diagnoserve_core::config::PipelineConfig;
use diagnoserve_core::dataset::Dataset;
use diagnoserve_core::pipeline::{self, FittedPipeline};
use diagnoserve_server::handlers;

fn fitted() -> FittedPipeline {
    let dataset = Dataset::bundled().unwrap();
    pipeline::build(dataset, &PipelineConfig::default()).unwrap()
}

fn valid_body(pipeline: &FittedPipeline) -> HashMap<String, f64> {
    let eval = pipeline.evaluation_set();
    pipeline
        .feature_names()
        .iter()
        .cloned()
        .zip(eval.x.row(0).iter().copied())
        .collect()
}

macro_rules! app {
    ($fitted:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($fitted))
                .configure(handlers::routes),
        )
        .await
    };
}

// ---------------------------------------------------------------------------
// POST /predict
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn predict_returns_label_and_probability() {
    let fitted = fitted();
    let body = valid_body(&fitted);
    let app = app!(fitted);

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    let prediction = resp["prediction"].as_u64().unwrap();
    let probability = resp["probability"].as_f64().unwrap();
    assert!(prediction == 0 || prediction == 1);
    assert!((0.0..=1.0).contains(&probability));
    assert_eq!(prediction == 1, probability >= 0.5);
}

#[actix_web::test]
async fn predict_schema_mismatch_is_bad_request() {
    let fitted = fitted();
    let mut body = valid_body(&fitted);
    body.remove("mean_radius");
    body.insert("bogus".to_string(), 1.0);
    let app = app!(fitted);

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("mean_radius"), "{}", message);
    assert!(message.contains("bogus"), "{}", message);
}

#[actix_web::test]
async fn predict_malformed_json_is_client_error() {
    let app = app!(fitted());

    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// GET /metrics
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn metrics_returns_full_report() {
    let app = app!(fitted());

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    let accuracy = resp["accuracy"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&accuracy));

    let matrix = resp["confusion_matrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[0].as_array().unwrap().len(), 2);

    let report = resp["classification_report"].as_object().unwrap();
    for key in ["0", "1", "accuracy", "macro avg", "weighted avg"] {
        assert!(report.contains_key(key), "missing report key '{}'", key);
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn index_serves_html() {
    let app = app!(fitted());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);
}
