use std::error::Error;
use std::fmt;

/// Errors raised while building or querying the diagnosis pipeline.
///
/// Build-time variants (`EmptyDataset`, `EmptySplit`, `ShapeMismatch`) are
/// fatal: callers must not serve from a pipeline that failed to build.
/// `SchemaMismatch` is a serving-time client error and never aborts the
/// process.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The dataset has no rows or no feature columns.
    EmptyDataset,
    /// The train/eval partition left one side without samples.
    EmptySplit { train: usize, eval: usize },
    /// Row-aligned inputs disagree on length.
    ShapeMismatch { expected: usize, got: usize },
    /// Inference input does not name exactly the trained feature set.
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyDataset => {
                write!(f, "dataset has no samples or no feature columns")
            }
            PipelineError::EmptySplit { train, eval } => write!(
                f,
                "train/eval split produced an empty side ({} train, {} eval samples)",
                train, eval
            ),
            PipelineError::ShapeMismatch { expected, got } => {
                write!(f, "expected {} values, got {}", expected, got)
            }
            PipelineError::SchemaMismatch { missing, unexpected } => {
                write!(f, "input features do not match the trained schema")?;
                if !missing.is_empty() {
                    write!(f, "; missing: {}", missing.join(", "))?;
                }
                if !unexpected.is_empty() {
                    write!(f, "; unexpected: {}", unexpected.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl Error for PipelineError {}
