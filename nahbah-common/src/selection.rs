//! Booklet selection tracker
//!
//! Selection is independent of the material filter: a design stays selected
//! after the filter hides it.

use serde::{Deserialize, Serialize};

use crate::models::Design;

/// Design IDs the visitor has added to their booklet
///
/// IDs are unique and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_design_ids: Vec<i64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present
    pub fn toggle_select(&mut self, id: i64) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.selected_design_ids.push(id);
        }
    }

    /// Remove `id`; no-op when it is not selected
    pub fn remove(&mut self, id: i64) {
        self.selected_design_ids.retain(|&selected| selected != id);
    }

    pub fn clear(&mut self) {
        self.selected_design_ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.selected_design_ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_design_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_design_ids.len()
    }

    /// Selected IDs in insertion order
    pub fn ids(&self) -> &[i64] {
        &self.selected_design_ids
    }
}

/// Selected designs in catalog order (not selection order)
pub fn selected_designs<'a>(all: &'a [Design], selection: &SelectionState) -> Vec<&'a Design> {
    all.iter()
        .filter(|design| selection.contains(design.id))
        .collect()
}
