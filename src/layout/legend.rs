//! Legend grouping.
//!
//! Partitions projected rectangles by legend label. Each partition is
//! one legend entry that hides or shows all of its rectangles as a
//! unit. Entry order follows row display order, so re-rendering the
//! same trace always produces the same legend.

use serde::Serialize;

use super::projector::RectDescriptor;

/// One independently togglable legend bucket.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    /// Shared legend label of every member rectangle.
    pub label: String,
    /// Indices into the layout's rectangle sequence.
    pub rect_indices: Vec<usize>,
    /// Current visibility of the whole bucket.
    pub visible: bool,
}

impl LegendEntry {
    /// Flips visibility for every rectangle in the bucket at once.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Groups rectangles into legend entries.
///
/// Entries appear in order of first appearance when rectangles are
/// visited by (row display index, input position), which pins legend
/// order to row display order.
pub fn group(rects: &[RectDescriptor]) -> Vec<LegendEntry> {
    let mut visit: Vec<usize> = (0..rects.len()).collect();
    visit.sort_by_key(|&i| (rects[i].row_index, i));

    let mut entries: Vec<LegendEntry> = Vec::new();
    for i in visit {
        let label = &rects[i].legend_label;
        match entries.iter_mut().find(|e| &e.label == label) {
            Some(entry) => entry.rect_indices.push(i),
            None => entries.push(LegendEntry {
                label: label.clone(),
                rect_indices: vec![i],
                visible: true,
            }),
        }
    }
    for entry in &mut entries {
        entry.rect_indices.sort_unstable();
    }
    entries
}
