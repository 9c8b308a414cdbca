//! Row-key registry.
//!
//! Discovers the distinct row identifiers of a trace and fixes their
//! display order: descending, so the first row renders at the top of
//! the chart. The display index is a rank lookup into that order, never
//! an arithmetic offset from the identifier value, so sparse ID sets
//! such as {1, 5, 9} still map onto consecutive rows 0, 1, 2.

use std::collections::HashMap;

use crate::error::{LayoutError, Result};
use crate::models::{GroupingAxis, Trace};

/// Frozen mapping from row identifiers to display positions.
///
/// Built once per trace before any record projection; read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct RowRegistry {
    axis: GroupingAxis,
    rows: Vec<i64>,
    rank: HashMap<i64, usize>,
}

impl RowRegistry {
    /// Builds the registry for the given row axis from a trace.
    pub fn from_trace(trace: &Trace, axis: GroupingAxis) -> Self {
        // BTreeSet gives ascending dedup; display order is descending.
        let mut rows: Vec<i64> = trace.ids_on(axis).into_iter().collect();
        rows.reverse();
        let rank = rows.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self { axis, rows, rank }
    }

    /// The row axis this registry was built for.
    pub fn axis(&self) -> GroupingAxis {
        self.axis
    }

    /// Zero-based display position of a row identifier (0 = top row).
    ///
    /// Fails with [`LayoutError::MissingRowKey`] when the identifier was
    /// not part of the trace the registry was built from.
    pub fn display_index(&self, id: i64) -> Result<usize> {
        self.rank
            .get(&id)
            .copied()
            .ok_or(LayoutError::MissingRowKey { axis: self.axis, id })
    }

    /// Row identifiers in display order (descending).
    pub fn row_ids(&self) -> &[i64] {
        &self.rows
    }

    /// Row labels in display order, e.g. `["Core 1", "Core 0"]`.
    pub fn row_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|id| format!("{} {id}", self.axis.label()))
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the trace contained no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
