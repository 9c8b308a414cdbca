//! Annotation placer.
//!
//! Derives directional markers anchored to a projected rectangle's
//! vertical band. Used only in task-centric views: release and deadline
//! markers point into the bar's row from above, a preemption marker
//! flags a segment that ended by forced suspension. The three kinds are
//! visually distinct (head shape and color) so a viewer can tell them
//! apart without consulting a legend.
//!
//! Absent optional fields suppress only their own marker; nothing is
//! synthesized.

use serde::Serialize;

use crate::error::Result;
use crate::models::ScheduleRecord;
use crate::palette::ALARM_COLOR;

use super::projector::BAR_TOP_MARGIN;
use super::registry::RowRegistry;

/// Kind of event a marker signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Work became available at this time.
    Release,
    /// The job's due time.
    Deadline,
    /// The segment ended by forced suspension.
    Preemption,
}

/// Arrowhead shape drawn at the marker's end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHead {
    /// Filled triangular head (release/deadline).
    Normal,
    /// Perpendicular bar head (preemption).
    Tee,
}

/// One vertical marker in chart coordinate space.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationDescriptor {
    pub kind: MarkerKind,
    /// Time-axis anchor.
    pub x: f64,
    /// Vertical start of the marker line.
    pub y_start: f64,
    /// Vertical end; the arrowhead is drawn here.
    pub y_end: f64,
    pub head: ArrowHead,
    pub line_color: &'static str,
    pub line_width: u32,
}

/// Markers for one record, anchored above its row band.
///
/// The caller is expected to invoke this only when rows are tasks;
/// core-centric views carry no annotations.
pub fn markers_for(record: &ScheduleRecord, registry: &RowRegistry) -> Result<Vec<AnnotationDescriptor>> {
    let row_base = registry.display_index(record.row_id(registry.axis()))? as f64;
    let band_top = row_base + BAR_TOP_MARGIN;
    let row_top = row_base + 1.0;

    let mut markers = Vec::new();

    if let Some(release) = record.release_time {
        markers.push(AnnotationDescriptor {
            kind: MarkerKind::Release,
            x: release,
            y_start: band_top,
            y_end: row_top,
            head: ArrowHead::Normal,
            line_color: "black",
            line_width: 1,
        });
    }

    if let Some(deadline) = record.deadline {
        markers.push(AnnotationDescriptor {
            kind: MarkerKind::Deadline,
            x: deadline,
            y_start: row_top,
            y_end: band_top,
            head: ArrowHead::Normal,
            line_color: "black",
            line_width: 1,
        });
    }

    if record.preemption {
        markers.push(AnnotationDescriptor {
            kind: MarkerKind::Preemption,
            x: record.finish_time,
            y_start: band_top,
            y_end: row_top,
            head: ArrowHead::Tee,
            line_color: ALARM_COLOR,
            line_width: 2,
        });
    }

    Ok(markers)
}
