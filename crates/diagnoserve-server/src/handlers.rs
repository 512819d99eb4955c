//! Request handlers and their error mapping.
use std::collections::HashMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde::Serialize;

use diagnoserve_core::error::PipelineError;
use diagnoserve_core::pipeline::FittedPipeline;

/// Pipeline error surfaced over HTTP. Schema problems are the caller's
/// fault and map to 400; anything else is a server defect.
#[derive(Debug)]
pub struct ApiError(pub PipelineError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            PipelineError::SchemaMismatch { .. } | PipelineError::ShapeMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    prediction: u8,
    probability: f64,
}

/// `POST /predict` — score one named feature vector.
pub async fn predict(
    pipeline: web::Data<FittedPipeline>,
    body: web::Json<HashMap<String, f64>>,
) -> Result<impl Responder, ApiError> {
    let prediction = pipeline.predict(&body).map_err(ApiError)?;
    Ok(web::Json(PredictResponse {
        prediction: prediction.label,
        probability: prediction.probability,
    }))
}

/// `GET /metrics` — evaluation metrics on the held-out split.
pub async fn metrics(pipeline: web::Data<FittedPipeline>) -> impl Responder {
    web::Json(pipeline.evaluate())
}

/// `GET /` — static demo page.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

/// Route table shared by the binary and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/predict").route(web::post().to(predict)))
        .service(web::resource("/metrics").route(web::get().to(metrics)));
}
