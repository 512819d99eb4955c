//! HTTP facade over a fitted diagnosis pipeline.
//!
//! The routing layer is deliberately thin: every handler calls straight into
//! [`diagnoserve_core::pipeline::FittedPipeline`], which is built once before
//! the listener starts and shared read-only across workers.
pub mod handlers;
