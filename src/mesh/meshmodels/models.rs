//! Mesh model data models

use serde::{Deserialize, Serialize};

use crate::mesh::traits::{null_as_empty, InventoryItem, ListingResponse};

/// Category a model belongs to
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub name: String,
}

/// A model definition as returned by the models endpoint
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MeshModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub category: Category,
    /// Remaining fields, kept for `view` and `pull`
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InventoryItem for MeshModel {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.category.name.clone(),
            self.name.clone(),
            self.version.clone(),
        ]
    }

    fn matches(&self, input: &str) -> bool {
        self.name == input || self.display_name == input
    }
}

/// Response envelope of `GET /api/meshmodels/models`
#[derive(Deserialize, Debug)]
pub struct MeshModelsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub models: Vec<MeshModel>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl ListingResponse<MeshModel> for MeshModelsResponse {
    fn into_items(self) -> Vec<MeshModel> {
        self.models
    }
}
