// ==========================================
// Storefront Catalog - Reference Entities
// ==========================================
// Brand / VariantType: one well-known instance per kind, looked up by name.
// Store: single placeholder dark store until a real store extract exists.
// ==========================================

use crate::domain::types::DocumentId;
use serde::{Deserialize, Serialize};

// ==========================================
// NamedReference
// ==========================================
// Stored shape of `brand` and `variant_type` documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedReference {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(default)]
    pub name: String,
}

pub type Brand = NamedReference;
pub type VariantType = NamedReference;

// ==========================================
// Store
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub shoptree_location_id: String,
    pub location_code: String,
}

impl Store {
    pub const PLACEHOLDER_NAME: &'static str = "Dropezy Store";
    pub const PLACEHOLDER_LOCATION_ID: &'static str = "962553ec420c45388a6bfb26308bdc23";
    pub const PLACEHOLDER_LOCATION_CODE: &'static str = "WHT";

    /// The one store seeded by the store importer.
    pub fn placeholder() -> Self {
        Self {
            id: DocumentId::generate(),
            name: Self::PLACEHOLDER_NAME.to_string(),
            shoptree_location_id: Self::PLACEHOLDER_LOCATION_ID.to_string(),
            location_code: Self::PLACEHOLDER_LOCATION_CODE.to_string(),
        }
    }
}
