//! Browsing session state
//!
//! Owns both catalogs together with the visitor's material filter and booklet
//! selection. Filter and selection are independent: filtering never drops a
//! selected design.

use nahbah_common::{
    selected_designs, visible_designs, Design, Error, FilterState, Material, Result,
    SelectionState,
};

use crate::catalog::CatalogState;
use crate::client::BackendClient;

/// In-memory state of one gallery session
#[derive(Debug, Default)]
pub struct GallerySession {
    pub materials: CatalogState<Material>,
    pub designs: CatalogState<Design>,
    pub filter: FilterState,
    pub selection: SelectionState,
}

impl GallerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with both catalogs already loaded
    pub fn with_catalogs(materials: Vec<Material>, designs: Vec<Design>) -> Self {
        Self {
            materials: CatalogState::Loaded(materials),
            designs: CatalogState::Loaded(designs),
            ..Self::default()
        }
    }

    /// Store freshly fetched catalogs; filter and selection are kept
    pub fn apply_catalogs(
        &mut self,
        materials: CatalogState<Material>,
        designs: CatalogState<Design>,
    ) {
        self.materials = materials;
        self.designs = designs;
    }

    pub fn toggle_material(&mut self, name: &str) {
        self.filter.toggle_material(name);
        tracing::debug!(material = %name, active = self.filter.contains(name), "Filter toggled");
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Toggle `id` in the booklet selection
    ///
    /// Deselecting always succeeds. Selecting requires an approved design in
    /// the loaded catalog.
    pub fn toggle_select(&mut self, id: i64) -> Result<()> {
        if !self.selection.contains(id) {
            match self.designs.items().iter().find(|design| design.id == id) {
                Some(design) if design.is_approved() => {}
                Some(_) => {
                    return Err(Error::InvalidInput(format!(
                        "Design {} is not approved",
                        id
                    )))
                }
                None => return Err(Error::NotFound(format!("Design {}", id))),
            }
        }

        self.selection.toggle_select(id);
        tracing::debug!(design_id = id, selected = self.selection.contains(id), "Selection toggled");
        Ok(())
    }

    pub fn remove_selected(&mut self, id: i64) {
        self.selection.remove(id);
    }

    pub fn visible_designs(&self) -> Vec<&Design> {
        visible_designs(self.designs.items(), &self.filter)
    }

    pub fn selected_designs(&self) -> Vec<&Design> {
        selected_designs(self.designs.items(), &self.selection)
    }

    /// Selected IDs in selection order
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selection.ids().to_vec()
    }
}

/// Fetch both catalogs concurrently
///
/// Either may finish first; a failure in one leaves the other untouched.
pub async fn load_catalogs(
    client: &BackendClient,
) -> (CatalogState<Material>, CatalogState<Design>) {
    let (materials, designs) = tokio::join!(client.list_materials(), client.list_designs());

    (
        CatalogState::from_result("materials", materials),
        CatalogState::from_result("designs", designs),
    )
}
