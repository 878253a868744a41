//! Common traits for inventory listings

use serde::{Deserialize, Deserializer};

/// One inventory record (model or component) that can be rendered as a row
pub trait InventoryItem {
    /// Human-facing name; records with an empty display name are not rendered
    fn display_name(&self) -> &str;

    /// Cells for the listing table, in header order
    fn row(&self) -> Vec<String>;

    /// Check if the record matches by name or display name
    fn matches(&self, input: &str) -> bool;
}

/// Decoded envelope returned by a collection endpoint
pub trait ListingResponse<T> {
    /// Consume self and return the records in server order
    fn into_items(self) -> Vec<T>;
}

/// Accept `null` for a required collection; the server encodes empty lists as null
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
