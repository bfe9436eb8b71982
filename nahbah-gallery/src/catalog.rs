//! Catalog load state
//!
//! Materials and designs load independently. A failed load degrades only the
//! feature that needs it; the failure is logged and kept for display.

use serde::Serialize;

use crate::client::ClientError;

/// Load state of one catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for CatalogState<T> {
    fn default() -> Self {
        CatalogState::Loading
    }
}

/// Status label reported to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Failed,
}

impl<T> CatalogState<T> {
    /// Convert a fetch result, logging failures under `catalog`
    pub fn from_result(catalog: &str, result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(items) => {
                tracing::info!(catalog, count = items.len(), "Catalog loaded");
                CatalogState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!(catalog, error = %e, "Catalog load failed");
                CatalogState::Failed(e.to_string())
            }
        }
    }

    /// Loaded items, or an empty slice while loading or after a failure
    pub fn items(&self) -> &[T] {
        match self {
            CatalogState::Loaded(items) => items,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    pub fn status(&self) -> CatalogStatus {
        match self {
            CatalogState::Loading => CatalogStatus::Loading,
            CatalogState::Loaded(_) => CatalogStatus::Loaded,
            CatalogState::Failed(_) => CatalogStatus::Failed,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
