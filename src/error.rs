//! Crate-wide error taxonomy.
//!
//! Every failure is terminal for the current render: the engine never
//! retries or emits a partial chart, so an error from any stage aborts
//! the whole layout build.

use thiserror::Error;

use crate::models::GroupingAxis;

/// Errors raised while building a chart layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The grouping-axis selector was neither `core` nor `task`.
    #[error("unsupported grouping axis `{0}` (expected \"core\" or \"task\")")]
    UnsupportedAxis(String),

    /// A required record field is missing or malformed.
    #[error("schema violation: {0}")]
    Schema(String),

    /// A record references a row identifier the registry does not know.
    ///
    /// The registry is built from the same trace being projected, so this
    /// indicates an upstream data or build-order bug.
    #[error("record references {axis} {id}, which is absent from the row registry")]
    MissingRowKey { axis: GroupingAxis, id: i64 },

    /// Trace file could not be read.
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    /// Trace file is not valid JSON or does not match the trace schema.
    #[error("failed to parse trace: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;
