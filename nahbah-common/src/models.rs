//! Catalog models as served by the backend
//!
//! Materials and designs are read-only from the gallery's point of view.
//! Unknown JSON fields are ignored so backend additions do not break loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable material a design calls for (e.g. "Wood", "Metal")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    /// Display name, also the filter key
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Denormalized material copy embedded in a design
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRef {
    pub id: i64,
    pub name: String,
}

/// Contributor of a design; absent for anonymous submissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRef {
    pub id: i64,
    pub name: String,
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Pending,
    Approved,
    Rejected,
}

/// A shelter design submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub material: MaterialRef,
    pub status: DesignStatus,
    #[serde(default)]
    pub design_file: Option<String>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub contributor: Option<ContributorRef>,
    pub submission_date: DateTime<Utc>,
}

impl Design {
    /// Only approved designs may be displayed or selected
    pub fn is_approved(&self) -> bool {
        self.status == DesignStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "Pallet cabin",
            "description": "Cabin built from shipping pallets",
            "material": {"id": 2, "name": "Wood"},
            "status": "approved",
            "design_file": "/media/designs/cabin.pdf",
            "preview_image": null,
            "contributor": {"id": 11, "name": "Kata"},
            "submission_date": "2024-03-05T14:30:00+01:00",
            "likes": 4
        }"#;

        let design: Design = serde_json::from_str(json).unwrap();
        assert_eq!(design.id, 7);
        assert_eq!(design.material.name, "Wood");
        assert!(design.is_approved());
        assert!(design.preview_image.is_none());
        assert_eq!(design.contributor.as_ref().unwrap().name, "Kata");
        assert_eq!(
            design.submission_date.to_rfc3339(),
            "2024-03-05T13:30:00+00:00"
        );
    }

    #[test]
    fn test_anonymous_design_without_optional_fields() {
        let json = r#"{
            "id": 1,
            "title": "Tarp shelter",
            "material": {"id": 3, "name": "Textile"},
            "status": "pending",
            "submission_date": "2024-01-01T00:00:00Z"
        }"#;

        let design: Design = serde_json::from_str(json).unwrap();
        assert!(design.contributor.is_none());
        assert!(design.design_file.is_none());
        assert_eq!(design.description, "");
        assert!(!design.is_approved());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": 1,
            "title": "x",
            "material": {"id": 3, "name": "Textile"},
            "status": "archived",
            "submission_date": "2024-01-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Design>(json).is_err());
    }

    #[test]
    fn test_material_optional_metadata() {
        let material: Material = serde_json::from_str(r#"{"id": 4, "name": "Metal"}"#).unwrap();
        assert_eq!(material.name, "Metal");
        assert!(material.image.is_none());
        assert!(material.description.is_none());
    }
}
