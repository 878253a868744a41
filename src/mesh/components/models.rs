//! Component data models

use serde::{Deserialize, Serialize};

use crate::mesh::meshmodels::Category;
use crate::mesh::traits::{null_as_empty, InventoryItem, ListingResponse};

/// The model a component belongs to (reduced view)
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ComponentModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub category: Category,
}

/// A component definition as returned by the components endpoint
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Component {
    #[serde(default)]
    pub kind: String,
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub model: ComponentModel,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl InventoryItem for Component {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.model.category.name.clone(),
            self.model.name.clone(),
            self.kind.clone(),
            self.model.version.clone(),
        ]
    }

    fn matches(&self, input: &str) -> bool {
        self.kind == input || self.display_name == input
    }
}

/// Response envelope of `GET /api/meshmodels/components`
#[derive(Deserialize, Debug)]
pub struct ComponentsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub components: Vec<Component>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl ListingResponse<Component> for ComponentsResponse {
    fn into_items(self) -> Vec<Component> {
        self.components
    }
}
