//! Trace file loading.
//!
//! Reads a JSON trace shaped `{"taskSet": [...], "makespan": n}` into a
//! [`Trace`]. Required fields that are missing or malformed fail here,
//! before any layout work starts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::models::Trace;

/// Loads a trace from a JSON file.
pub fn load_trace(path: &Path) -> Result<Trace> {
    let file = File::open(path)?;
    let trace: Trace = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        records = trace.task_set.len(),
        makespan = trace.makespan,
        "trace loaded"
    );
    Ok(trace)
}
