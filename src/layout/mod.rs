//! Timeline layout engine.
//!
//! Turns an immutable [`Trace`] into everything a quad-drawing backend
//! needs: an ordered row-label sequence, one rectangle per record,
//! directional markers for task-centric views, and optional legend
//! groups.
//!
//! The pipeline is build-then-freeze: the row registry and the visual
//! encoding tables are fully populated before the first record is
//! projected and never mutated afterwards. Record projection is a pure
//! per-record mapping with no cross-record dependencies, so any record
//! that fails aborts the whole build — no chart is ever silently
//! incomplete.

pub mod annotation;
pub mod encoding;
pub mod legend;
pub mod projector;
pub mod registry;

pub use annotation::{AnnotationDescriptor, ArrowHead, MarkerKind};
pub use encoding::VisualEncoding;
pub use legend::LegendEntry;
pub use projector::{RectDescriptor, BAR_BOTTOM_MARGIN, BAR_TOP_MARGIN};
pub use registry::RowRegistry;

use serde::Serialize;

use crate::error::Result;
use crate::models::{GroupingAxis, Trace};

/// Flags controlling a layout build.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Switch fills to the monochrome ramp and paint deadline misses in
    /// the alarm color.
    pub highlight_deadline_miss: bool,
    /// Emit legend groups.
    pub draw_legend: bool,
}

/// Complete layout of one chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    /// Row axis the layout was built for.
    pub axis: GroupingAxis,
    /// Time-axis upper bound, copied from the trace.
    pub makespan: f64,
    /// Row labels in display order (top row first).
    pub row_labels: Vec<String>,
    /// One rectangle per record, in trace order.
    pub rects: Vec<RectDescriptor>,
    /// Release/deadline/preemption markers (task-centric views only).
    pub annotations: Vec<AnnotationDescriptor>,
    /// Legend groups, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Vec<LegendEntry>>,
}

impl ChartLayout {
    /// Builds the full layout for a trace.
    pub fn build(trace: &Trace, axis: GroupingAxis, opts: LayoutOptions) -> Result<Self> {
        let registry = RowRegistry::from_trace(trace, axis);
        let keys = trace.ids_on(axis.secondary());
        let encoding = VisualEncoding::assign(&keys, opts.highlight_deadline_miss);
        tracing::debug!(
            %axis,
            rows = registry.len(),
            secondary_keys = keys.len(),
            highlight = opts.highlight_deadline_miss,
            "registry and encoding tables frozen"
        );

        let mut rects = Vec::with_capacity(trace.task_set.len());
        let mut annotations = Vec::new();
        for record in &trace.task_set {
            rects.push(projector::project(record, &registry, &encoding)?);
            if axis == GroupingAxis::Task {
                annotations.extend(annotation::markers_for(record, &registry)?);
            }
        }

        let legend = opts.draw_legend.then(|| legend::group(&rects));
        tracing::debug!(
            rects = rects.len(),
            annotations = annotations.len(),
            legend_entries = legend.as_ref().map_or(0, Vec::len),
            "layout built"
        );

        Ok(Self {
            axis,
            makespan: trace.makespan,
            row_labels: registry.row_labels(),
            rects,
            annotations,
            legend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleRecord;
    use crate::palette::{self, ALARM_COLOR};

    fn record(core_id: i64, task_id: i64, start: f64, finish: f64) -> ScheduleRecord {
        ScheduleRecord {
            core_id,
            task_id,
            job_id: None,
            release_time: None,
            deadline: None,
            start_time: start,
            finish_time: finish,
            preemption: false,
            deadline_miss: false,
        }
    }

    fn two_core_trace() -> Trace {
        Trace {
            task_set: vec![
                record(0, 3, 0.0, 4.0),
                record(1, 5, 1.0, 3.0),
                record(0, 5, 4.0, 6.0),
            ],
            makespan: 20.0,
        }
    }

    #[test]
    fn test_core_view_scenario() {
        let layout = ChartLayout::build(
            &two_core_trace(),
            GroupingAxis::Core,
            LayoutOptions::default(),
        )
        .unwrap();

        assert_eq!(layout.row_labels, vec!["Core 1", "Core 0"]);
        assert_eq!(layout.rects.len(), 3);
        assert!(layout.annotations.is_empty());
        assert!(layout.legend.is_none());

        // Tasks 3 and 5 differ in both moduli, so both channels separate them.
        let t3 = &layout.rects[0];
        let t5 = &layout.rects[1];
        assert_ne!(t3.fill_color, t5.fill_color);
        assert_ne!(t3.hatch_pattern, t5.hatch_pattern);
        assert_eq!(t3.legend_label, "Task 3");
        assert_eq!(t5.legend_label, "Task 5");
    }

    #[test]
    fn test_task_view_emits_preemption_marker_only_when_preempted() {
        let mut trace = two_core_trace();
        trace.task_set[1].preemption = true;
        let layout =
            ChartLayout::build(&trace, GroupingAxis::Task, LayoutOptions::default()).unwrap();

        let preemptions: Vec<_> = layout
            .annotations
            .iter()
            .filter(|a| a.kind == MarkerKind::Preemption)
            .collect();
        assert_eq!(preemptions.len(), 1);
        assert_eq!(preemptions[0].x, trace.task_set[1].finish_time);
        assert_eq!(preemptions[0].line_color, ALARM_COLOR);
    }

    #[test]
    fn test_core_view_never_emits_annotations() {
        let mut trace = two_core_trace();
        trace.task_set[0].release_time = Some(0.0);
        trace.task_set[0].deadline = Some(10.0);
        trace.task_set[0].preemption = true;
        let layout =
            ChartLayout::build(&trace, GroupingAxis::Core, LayoutOptions::default()).unwrap();
        assert!(layout.annotations.is_empty());
    }

    #[test]
    fn test_deadline_miss_highlighting_scenario() {
        let mut trace = two_core_trace();
        // Records 1 and 2 share task 5; only record 1 missed.
        trace.task_set[1].deadline_miss = true;
        let opts = LayoutOptions {
            highlight_deadline_miss: true,
            draw_legend: false,
        };
        let layout = ChartLayout::build(&trace, GroupingAxis::Core, opts).unwrap();

        assert_eq!(layout.rects[1].fill_color, ALARM_COLOR);
        assert_ne!(layout.rects[2].fill_color, ALARM_COLOR);
        // Without highlighting the same record keeps its palette color.
        let plain = ChartLayout::build(&trace, GroupingAxis::Core, LayoutOptions::default())
            .unwrap();
        assert_eq!(plain.rects[1].fill_color, palette::CATEGORICAL[5]);
    }

    #[test]
    fn test_legend_when_requested() {
        let opts = LayoutOptions {
            highlight_deadline_miss: false,
            draw_legend: true,
        };
        let layout = ChartLayout::build(&two_core_trace(), GroupingAxis::Core, opts).unwrap();
        let legend = layout.legend.unwrap();
        let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
        // Row 0 is Core 1, whose only segment belongs to task 5.
        assert_eq!(labels, vec!["Task 5", "Task 3"]);
        let t5 = &legend[0];
        assert_eq!(t5.rect_indices, vec![1, 2]);
    }

    #[test]
    fn test_bad_record_aborts_whole_build() {
        let mut trace = two_core_trace();
        trace.task_set[2].finish_time = -1.0;
        let res = ChartLayout::build(&trace, GroupingAxis::Core, LayoutOptions::default());
        assert!(res.is_err());
    }
}
