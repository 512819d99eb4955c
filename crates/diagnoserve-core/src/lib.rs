//! diagnoserve-core: train-once binary diagnosis pipeline.
//!
//! This crate loads a fixed labeled dataset, partitions it deterministically
//! into training and evaluation splits, fits a standard scaler and a logistic
//! regression classifier on the training split only, and exposes the resulting
//! immutable [`pipeline::FittedPipeline`] for single-vector prediction and
//! held-out evaluation.
//!
//! The HTTP layer lives in the companion server crate and only calls into this
//! API, so the pipeline can be built and tested without standing up a listener.
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
