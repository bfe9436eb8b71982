//! HTTP API handlers for nahbah-gallery

pub mod booklet;
pub mod catalog;
pub mod filters;
pub mod health;
pub mod selection;
pub mod ui;

use nahbah_common::Locale;
use serde::Deserialize;

pub use booklet::download_booklet;
pub use catalog::{get_selection, list_materials, list_visible_designs, reload_catalog};
pub use filters::{clear_filters, toggle_material};
pub use health::{get_build_info, health_routes};
pub use selection::{remove_selection, toggle_selection};
pub use ui::{get_messages, serve_app_js, serve_index};

/// Optional `?lang=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    /// Requested locale, or `fallback` when absent or unsupported
    pub fn resolve(&self, fallback: Locale) -> Locale {
        self.lang
            .as_deref()
            .and_then(|code| code.parse().ok())
            .unwrap_or(fallback)
    }
}
