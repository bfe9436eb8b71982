//! Material filter for the design library
//!
//! Filtering is keyed by material *name*, not id. Each design carries exactly
//! one material, so several selected names combine as a union.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Design;

/// Set of material names restricting the visible designs
///
/// An empty set means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    materials: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` if absent, remove it if present
    pub fn toggle_material(&mut self, name: &str) {
        if !self.materials.remove(name) {
            self.materials.insert(name.to_string());
        }
    }

    /// Drop every selected material
    pub fn clear(&mut self) {
        self.materials.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Selected names in lexical order
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(String::as_str)
    }

    fn matches(&self, design: &Design) -> bool {
        self.materials.is_empty() || self.materials.contains(&design.material.name)
    }
}

/// Approved designs passing the filter, in catalog order
///
/// Names with no matching designs contribute nothing and do not affect
/// the other selected names.
pub fn visible_designs<'a>(all: &'a [Design], filter: &FilterState) -> Vec<&'a Design> {
    all.iter()
        .filter(|design| design.is_approved() && filter.matches(design))
        .collect()
}
