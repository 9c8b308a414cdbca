//! Visual-encoding assigner.
//!
//! Builds the color and hatch-pattern lookup tables for the secondary
//! axis. The tables are total over the key set they were built from,
//! fully populated before first use, and never mutated afterwards, so
//! identical logical entities always render identically across a run.
//!
//! Two color modes:
//! - normal: the categorical palette, indexed `key mod 19`;
//! - deadline-miss highlighting: a monochrome ramp sized `|keys| + 2`
//!   indexed from 1, with a fixed alarm color overriding the ramp for
//!   any record whose job missed its deadline.

use std::collections::{BTreeSet, HashMap};

use crate::error::{LayoutError, Result};
use crate::palette::{self, HatchPattern, ALARM_COLOR};

/// Frozen color/pattern tables for one trace.
#[derive(Debug, Clone)]
pub struct VisualEncoding {
    colors: HashMap<i64, String>,
    patterns: HashMap<i64, HatchPattern>,
    highlight_deadline_miss: bool,
}

impl VisualEncoding {
    /// Builds both tables for a deduplicated secondary key set.
    ///
    /// Deterministic: the same key set and flag always yield identical
    /// tables.
    pub fn assign(keys: &BTreeSet<i64>, highlight_deadline_miss: bool) -> Self {
        let colors = if highlight_deadline_miss {
            let ramp = palette::grey_ramp(keys.len() + 2);
            keys.iter()
                .map(|&key| {
                    // Position 0 (lightest shade) stays reserved. Dense
                    // zero-based keys land on `key + 1`; sparse keys wrap
                    // within positions 1..ramp.len() instead of running
                    // off the ramp.
                    let idx = 1 + key.rem_euclid(ramp.len() as i64 - 1) as usize;
                    (key, ramp[idx].clone())
                })
                .collect()
        } else {
            keys.iter()
                .map(|&key| (key, palette::categorical_color(key).to_string()))
                .collect()
        };

        let patterns = keys
            .iter()
            .map(|&key| (key, HatchPattern::for_key(key)))
            .collect();

        Self {
            colors,
            patterns,
            highlight_deadline_miss,
        }
    }

    /// Effective fill color for a record.
    ///
    /// The alarm color takes precedence unconditionally when
    /// highlighting is on and the record's job missed its deadline;
    /// otherwise the table entry for the record's secondary key.
    pub fn color(&self, key: i64, deadline_miss: bool) -> Result<&str> {
        if self.highlight_deadline_miss && deadline_miss {
            return Ok(ALARM_COLOR);
        }
        self.colors
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| missing_key(key))
    }

    /// Hatch pattern for a record's secondary key.
    pub fn pattern(&self, key: i64) -> Result<HatchPattern> {
        self.patterns.get(&key).copied().ok_or_else(|| missing_key(key))
    }

    /// Whether deadline-miss highlighting is active.
    pub fn highlights_deadline_miss(&self) -> bool {
        self.highlight_deadline_miss
    }
}

fn missing_key(key: i64) -> LayoutError {
    LayoutError::Schema(format!(
        "secondary key {key} is absent from the encoding tables; \
         registry and encoding must be built from the same trace"
    ))
}
