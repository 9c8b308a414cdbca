//! Timeline layout and visual-encoding engine for schedule-execution
//! traces.
//!
//! Takes a trace of which task ran on which core, from when to when,
//! whether it missed a deadline or was preempted, and computes the
//! geometry and styling of a timeline chart. The pixel-producing
//! backend (quads, SVG/HTML, tooltips) is an external collaborator that
//! consumes the output of this crate.
//!
//! # Modules
//!
//! - **`models`**: Input types — `ScheduleRecord`, `Trace`, `GroupingAxis`
//! - **`layout`**: The engine — row registry, visual encoding tables,
//!   record projector, annotation placer, legend grouping
//! - **`palette`**: Process-wide color and hatch-pattern constants
//! - **`loader`**: JSON trace file loading
//! - **`error`**: The `LayoutError` taxonomy
//!
//! # Pipeline
//!
//! The registry and encoding tables are built once per trace and frozen;
//! each record is then projected independently into a rectangle (plus,
//! for task-centric views, release/deadline/preemption markers). Any
//! record failing projection aborts the build, so no chart is silently
//! incomplete.
//!
//! ```
//! use sched_timeline::layout::{ChartLayout, LayoutOptions};
//! use sched_timeline::models::{GroupingAxis, Trace};
//!
//! let trace: Trace = serde_json::from_str(
//!     r#"{"taskSet": [
//!         {"coreID": 0, "taskID": 3, "startTime": 0, "finishTime": 4, "preemption": false},
//!         {"coreID": 1, "taskID": 5, "startTime": 1, "finishTime": 3, "preemption": false}
//!     ], "makespan": 20}"#,
//! )?;
//! let layout = ChartLayout::build(&trace, GroupingAxis::Core, LayoutOptions::default())?;
//! assert_eq!(layout.row_labels, vec!["Core 1", "Core 0"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod layout;
pub mod loader;
pub mod models;
pub mod palette;

pub use error::{LayoutError, Result};
pub use layout::{ChartLayout, LayoutOptions};
pub use models::{GroupingAxis, Trace};
