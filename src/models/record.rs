//! Schedule record model.
//!
//! A record describes one contiguous execution segment of a task on a
//! core — the atomic unit rendered as a rectangle. Field names follow
//! the JSON trace schema produced by schedulers (camelCase with `ID`
//! suffixes), mapped to Rust naming via serde renames.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

use super::GroupingAxis;

/// Job instance identifier.
///
/// Traces in the wild carry either an integer or a string here, so both
/// are accepted and preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    /// Numeric job index.
    Int(i64),
    /// Free-form job label.
    Str(String),
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobId::Int(n) => write!(f, "{n}"),
            JobId::Str(s) => f.write_str(s),
        }
    }
}

/// One execution segment of a task on a processing unit.
///
/// Identifiers need not be contiguous or zero-based; sparse ID sets are
/// legal and must not create gaps in the displayed rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Processing unit the segment ran on.
    #[serde(rename = "coreID")]
    pub core_id: i64,
    /// Logical task identity.
    #[serde(rename = "taskID")]
    pub task_id: i64,
    /// Specific job instance of the task, if known.
    #[serde(rename = "jobID", default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    /// Time the job became available. `None` suppresses the release marker.
    #[serde(rename = "releaseTime", default)]
    pub release_time: Option<f64>,
    /// Absolute deadline of the job. `None` suppresses the deadline marker.
    #[serde(default)]
    pub deadline: Option<f64>,
    /// Segment start, in trace time units.
    #[serde(rename = "startTime")]
    pub start_time: f64,
    /// Segment end, in trace time units.
    #[serde(rename = "finishTime")]
    pub finish_time: f64,
    /// True if the segment ended by forced suspension, not completion.
    pub preemption: bool,
    /// True if the owning job missed its deadline.
    #[serde(rename = "deadlineMiss", default)]
    pub deadline_miss: bool,
}

impl ScheduleRecord {
    /// Identifier on the row axis for this record.
    #[inline]
    pub fn row_id(&self, axis: GroupingAxis) -> i64 {
        match axis {
            GroupingAxis::Core => self.core_id,
            GroupingAxis::Task => self.task_id,
        }
    }

    /// Identifier on the secondary (color/pattern/legend) axis.
    #[inline]
    pub fn secondary_id(&self, axis: GroupingAxis) -> i64 {
        match axis {
            GroupingAxis::Core => self.task_id,
            GroupingAxis::Task => self.core_id,
        }
    }

    /// Checks the segment-bound invariant `start_time <= finish_time`.
    pub fn check(&self) -> Result<()> {
        if self.start_time > self.finish_time {
            return Err(LayoutError::Schema(format!(
                "segment of task {} on core {} has startTime {} > finishTime {}",
                self.task_id, self.core_id, self.start_time, self.finish_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, finish: f64) -> ScheduleRecord {
        ScheduleRecord {
            core_id: 0,
            task_id: 1,
            job_id: None,
            release_time: None,
            deadline: None,
            start_time: start,
            finish_time: finish,
            preemption: false,
            deadline_miss: false,
        }
    }

    #[test]
    fn test_axis_projection() {
        let rec = segment(0.0, 1.0);
        assert_eq!(rec.row_id(GroupingAxis::Core), 0);
        assert_eq!(rec.secondary_id(GroupingAxis::Core), 1);
        assert_eq!(rec.row_id(GroupingAxis::Task), 1);
        assert_eq!(rec.secondary_id(GroupingAxis::Task), 0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(segment(5.0, 3.0).check().is_err());
        assert!(segment(3.0, 3.0).check().is_ok());
    }

    #[test]
    fn test_record_json_schema() {
        let rec: ScheduleRecord = serde_json::from_str(
            r#"{"coreID": 2, "taskID": 7, "jobID": "7-0", "releaseTime": 0.0,
                "deadline": 10.0, "startTime": 1.5, "finishTime": 4.0,
                "preemption": true, "deadlineMiss": false}"#,
        )
        .unwrap();
        assert_eq!(rec.core_id, 2);
        assert_eq!(rec.task_id, 7);
        assert_eq!(rec.job_id, Some(JobId::Str("7-0".into())));
        assert!(rec.preemption);
    }

    #[test]
    fn test_optional_fields_default() {
        // releaseTime, deadline, jobID and deadlineMiss may all be absent.
        let rec: ScheduleRecord = serde_json::from_str(
            r#"{"coreID": 0, "taskID": 3, "startTime": 0, "finishTime": 2, "preemption": false}"#,
        )
        .unwrap();
        assert_eq!(rec.release_time, None);
        assert_eq!(rec.deadline, None);
        assert_eq!(rec.job_id, None);
        assert!(!rec.deadline_miss);
    }

    #[test]
    fn test_missing_required_field_is_error() {
        // finishTime absent
        let res: std::result::Result<ScheduleRecord, _> = serde_json::from_str(
            r#"{"coreID": 0, "taskID": 3, "startTime": 0, "preemption": false}"#,
        );
        assert!(res.is_err());
    }
}
