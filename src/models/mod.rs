//! Trace domain models.
//!
//! Provides the input-side data types for timeline layout: one
//! [`ScheduleRecord`] per execution segment, a [`Trace`] wrapping the
//! full record set, and the [`GroupingAxis`] selector that decides
//! which identifier set forms the chart rows.
//!
//! A trace is loaded once, stays immutable for the duration of a
//! render, and is discarded afterwards; no persisted state exists.

mod record;
mod trace;

pub use record::{JobId, ScheduleRecord};
pub use trace::{GroupingAxis, Trace};
