// ==========================================
// Storefront Catalog - Inventory Model
// ==========================================
// Single-store stock/price snapshot. Stock is a placeholder until
// a real inventory source is wired in.
// ==========================================

use crate::domain::types::{Currency, DocumentId, ProductStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub store_id: DocumentId,
    pub shoptree_location_id: String,
    #[serde(default)]
    pub products: Vec<InventoryProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryProduct {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub stock: i32,
    pub price: Option<Amount>,
    pub product_id: DocumentId,
    pub variant_id: DocumentId,
    pub shoptree_variant_id: String,
    pub status: ProductStatus,
}

/// Money as a minor-unit decimal string plus currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub num: String,
    pub cur: Currency,
}
