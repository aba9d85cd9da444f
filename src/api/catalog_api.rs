// ==========================================
// Storefront Catalog - Catalog Read API
// ==========================================
// Responsibility: category tree and product listing for storefront callers
// Names are returned in the localized (ID) language
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::{Category, CategoryLevel, Product};
use crate::repository::{collections, find_all_as, DocumentStore, Filter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

// ==========================================
// Views
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub category_id: String,
    pub level: CategoryLevel,
    pub name: String,
    pub images_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_categories: Vec<CategoryView>,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            category_id: category.id.to_string(),
            level: category.level,
            name: category.name_id.clone(),
            images_urls: category.images_urls.clone(),
            child_categories: category.child_categories.iter().map(CategoryView::from).collect(),
        }
    }
}

/// Category id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub product_id: String,
    pub name: String,
    pub images_urls: Vec<String>,
    pub category_1: CategoryRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_2: Option<CategoryRef>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.to_string(),
            name: product.name_id.clone(),
            images_urls: product.display_images(),
            category_1: CategoryRef {
                category_id: product.category_l1_id.to_string(),
            },
            category_2: product.category_l2_id.map(|id| CategoryRef {
                category_id: id.to_string(),
            }),
        }
    }
}

// ==========================================
// CatalogApi
// ==========================================
pub struct CatalogApi<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> CatalogApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Full L1/L2 tree in stored order.
    pub async fn list_categories(&self) -> ApiResult<Vec<CategoryView>> {
        let categories: Vec<Category> =
            find_all_as(self.store.as_ref(), collections::CATEGORY, &Filter::all())
                .await
                .map_err(|e| {
                    error!(error = %e, "failed to fetch categories from store");
                    e
                })?;

        debug!(count = categories.len(), "categories fetched");
        Ok(categories.iter().map(CategoryView::from).collect())
    }

    pub async fn list_products(&self) -> ApiResult<Vec<ProductView>> {
        let products: Vec<Product> =
            find_all_as(self.store.as_ref(), collections::PRODUCT, &Filter::all())
                .await
                .map_err(|e| {
                    error!(error = %e, "failed to fetch products from store");
                    e
                })?;

        debug!(count = products.len(), "products fetched");
        Ok(products.iter().map(ProductView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentId, ProductVariant, VariantStatus};

    fn variant(sku: &str, status: VariantStatus) -> ProductVariant {
        ProductVariant {
            id: DocumentId::generate(),
            shoptree_variant_id: sku.to_string(),
            images_urls: vec![format!("{}-0.webp", sku)],
            variant_type_id: DocumentId::generate(),
            variant_value: "1".to_string(),
            variant_quantifier_en: "pc".to_string(),
            variant_quantifier_id: "pc".to_string(),
            maximum_order: 0,
            sku: sku.to_string(),
            barcode: "1".to_string(),
            variant_status: status,
        }
    }

    #[test]
    fn test_product_view_uses_default_variant_images() {
        let product = Product {
            id: DocumentId::generate(),
            name_en: "Cola".to_string(),
            name_id: "Kola".to_string(),
            description_en: None,
            description_id: None,
            brand_id: DocumentId::generate(),
            category_l1_id: DocumentId::generate(),
            category_l2_id: None,
            variants: vec![
                variant("DRK-1", VariantStatus::Unspecified),
                variant("DRK-2", VariantStatus::Default),
            ],
        };

        let view = ProductView::from(&product);
        assert_eq!(view.name, "Kola");
        assert_eq!(view.images_urls, vec!["DRK-2-0.webp"]);
        assert_eq!(view.category_1.category_id, product.category_l1_id.to_string());
        assert!(view.category_2.is_none());
    }

    #[test]
    fn test_category_view_uses_localized_name() {
        let child = Category {
            id: DocumentId::generate(),
            level: CategoryLevel::Level2,
            name_en: "Soda".to_string(),
            name_id: "Soda-ID".to_string(),
            images_urls: vec!["c-0.webp".to_string()],
            abbreviation: String::new(),
            child_categories: Vec::new(),
        };
        let parent = Category {
            id: DocumentId::generate(),
            level: CategoryLevel::Level1,
            name_en: "Drinks".to_string(),
            name_id: "Minuman".to_string(),
            images_urls: vec!["p-0.webp".to_string()],
            abbreviation: "DRK".to_string(),
            child_categories: vec![child],
        };

        let view = CategoryView::from(&parent);
        assert_eq!(view.name, "Minuman");
        assert_eq!(view.child_categories[0].name, "Soda-ID");
        assert_eq!(view.child_categories[0].level, CategoryLevel::Level2);
    }
}
