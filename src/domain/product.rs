// ==========================================
// Storefront Catalog - Product Model
// ==========================================
// Product = variant container; one variant per source row.
// Aligned with the `product` collection (variants embedded).
// ==========================================

use crate::domain::types::{DocumentId, VariantStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// Product
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name_en: String,
    pub name_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_id: Option<String>,
    pub brand_id: DocumentId,
    pub category_l1_id: DocumentId,
    // None only when the resolved L1 had no children at import time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_l2_id: Option<DocumentId>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The variant flagged DEFAULT, if any.
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| v.variant_status == VariantStatus::Default)
    }

    /// Images shown for the product: the default variant's, else the first variant's.
    pub fn display_images(&self) -> Vec<String> {
        self.default_variant()
            .or_else(|| self.variants.first())
            .map(|v| v.images_urls.clone())
            .unwrap_or_default()
    }
}

// ==========================================
// ProductVariant
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub shoptree_variant_id: String, // external variant id
    #[serde(default)]
    pub images_urls: Vec<String>,
    pub variant_type_id: DocumentId,
    pub variant_value: String,
    pub variant_quantifier_en: String,
    pub variant_quantifier_id: String,
    pub maximum_order: i32, // 0 = no limit
    pub sku: String,
    pub barcode: String,
    #[serde(default)]
    pub variant_status: VariantStatus,
}
