//! Trace model and grouping-axis selector.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

use super::ScheduleRecord;

/// Which identifier set forms the vertical chart rows.
///
/// The other set becomes the secondary axis, used for color, pattern
/// and legend keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingAxis {
    /// Rows are cores; tasks drive color/pattern/legend.
    Core,
    /// Rows are tasks; cores drive color/pattern/legend.
    Task,
}

impl GroupingAxis {
    /// Axis label used as a row-label prefix ("Core 0", "Task 7").
    pub fn label(self) -> &'static str {
        match self {
            GroupingAxis::Core => "Core",
            GroupingAxis::Task => "Task",
        }
    }

    /// The opposite axis.
    pub fn secondary(self) -> GroupingAxis {
        match self {
            GroupingAxis::Core => GroupingAxis::Task,
            GroupingAxis::Task => GroupingAxis::Core,
        }
    }
}

impl std::fmt::Display for GroupingAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingAxis::Core => f.write_str("core"),
            GroupingAxis::Task => f.write_str("task"),
        }
    }
}

impl FromStr for GroupingAxis {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(GroupingAxis::Core),
            "task" => Ok(GroupingAxis::Task),
            other => Err(LayoutError::UnsupportedAxis(other.to_string())),
        }
    }
}

/// A complete schedule-execution trace.
///
/// Immutable for the duration of a render; the layout engine never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    /// One record per task execution segment.
    #[serde(rename = "taskSet")]
    pub task_set: Vec<ScheduleRecord>,
    /// Upper bound of the chart's time axis.
    pub makespan: f64,
}

impl Trace {
    /// Distinct identifiers present on the given axis, in ascending order.
    pub fn ids_on(&self, axis: GroupingAxis) -> BTreeSet<i64> {
        self.task_set.iter().map(|r| r.row_id(axis)).collect()
    }
}
