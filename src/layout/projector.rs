//! Timeline record projector.
//!
//! Pure mapping from one [`ScheduleRecord`] plus the frozen registry
//! and encoding tables into a rectangle descriptor in chart coordinate
//! space. Time-axis values pass through in input units; the vertical
//! band is a fixed layout constant.

use serde::Serialize;

use crate::error::Result;
use crate::models::ScheduleRecord;
use crate::palette::HatchPattern;

use super::encoding::VisualEncoding;
use super::registry::RowRegistry;

/// Gap below a bar within its row. Together with [`BAR_TOP_MARGIN`] this
/// reserves visible space between adjacent rows regardless of row count.
pub const BAR_BOTTOM_MARGIN: f64 = 0.3;
/// Top of a bar relative to its row base.
pub const BAR_TOP_MARGIN: f64 = 0.7;

/// One rectangle in chart coordinate space, ready for a quad-drawing
/// backend.
#[derive(Debug, Clone, Serialize)]
pub struct RectDescriptor {
    /// Segment start (time-axis units, unscaled).
    pub left: f64,
    /// Segment end (time-axis units, unscaled).
    pub right: f64,
    /// `row_base + 0.3`.
    pub bottom: f64,
    /// `row_base + 0.7`.
    pub top: f64,
    /// Display index of the owning row (0 = top row).
    pub row_index: usize,
    /// Effective fill color (deadline-miss override already applied).
    pub fill_color: String,
    /// Fill texture keyed by the secondary-axis identifier.
    pub hatch_pattern: HatchPattern,
    /// Legend bucket, naming the secondary axis ("Task 3" / "Core 0").
    pub legend_label: String,
}

impl RectDescriptor {
    /// Row base the bar's vertical band is anchored to.
    #[inline]
    pub fn row_base(&self) -> f64 {
        self.row_index as f64
    }
}

/// Projects a record into a rectangle descriptor.
///
/// Fails when the record violates the segment-bound invariant or
/// references a row identifier absent from the registry.
pub fn project(
    record: &ScheduleRecord,
    registry: &RowRegistry,
    encoding: &VisualEncoding,
) -> Result<RectDescriptor> {
    record.check()?;

    let axis = registry.axis();
    let row_index = registry.display_index(record.row_id(axis))?;
    let row_base = row_index as f64;

    let secondary = record.secondary_id(axis);
    let fill_color = encoding.color(secondary, record.deadline_miss)?.to_string();
    let hatch_pattern = encoding.pattern(secondary)?;

    Ok(RectDescriptor {
        left: record.start_time,
        right: record.finish_time,
        bottom: row_base + BAR_BOTTOM_MARGIN,
        top: row_base + BAR_TOP_MARGIN,
        row_index,
        fill_color,
        hatch_pattern,
        legend_label: format!("{} {secondary}", axis.secondary().label()),
    })
}
