// ==========================================
// Storefront Catalog - Required-Field Validation
// ==========================================
// Responsibility: presence checks per entity
// Rule: fields are checked in a fixed order, the first miss wins
// ==========================================

use crate::domain::{Category, DocumentId, Inventory, InventoryProduct, ProductVariant};
use crate::importer::error::ValidationError;
use crate::importer::product_builder::ProductDraft;

type Check = Result<(), ValidationError>;

fn require(present: bool, err: ValidationError) -> Check {
    if present {
        Ok(())
    } else {
        Err(err)
    }
}

fn has_image(images: &[String]) -> bool {
    images.first().map_or(false, |url| !url.is_empty())
}

fn has_id(id: &DocumentId) -> bool {
    !id.is_nil()
}

/// L1: English name, localized name, abbreviation, image.
pub fn validate_parent_category(category: &Category) -> Check {
    require(!category.name_en.is_empty(), ValidationError::CategoryNameEnRequired)?;
    require(!category.name_id.is_empty(), ValidationError::CategoryNameIdRequired)?;
    require(!category.abbreviation.is_empty(), ValidationError::AbbreviationRequired)?;
    require(has_image(&category.images_urls), ValidationError::CategoryImageUrlRequired)
}

/// L2: English name, localized name, image.
pub fn validate_child_category(category: &Category) -> Check {
    require(!category.name_en.is_empty(), ValidationError::SubcategoryNameEnRequired)?;
    require(!category.name_id.is_empty(), ValidationError::SubcategoryNameIdRequired)?;
    require(has_image(&category.images_urls), ValidationError::SubcategoryImageUrlRequired)
}

pub fn validate_variant(variant: &ProductVariant) -> Check {
    require(has_id(&variant.id), ValidationError::VariantIdRequired)?;
    require(!variant.shoptree_variant_id.is_empty(), ValidationError::ShoptreeVariantIdRequired)?;
    require(has_image(&variant.images_urls), ValidationError::VariantImageUrlRequired)?;
    require(has_id(&variant.variant_type_id), ValidationError::VariantTypeIdRequired)?;
    require(!variant.variant_value.is_empty(), ValidationError::VariantValueRequired)?;
    require(!variant.variant_quantifier_id.is_empty(), ValidationError::VariantQuantifierIdRequired)?;
    require(!variant.variant_quantifier_en.is_empty(), ValidationError::VariantQuantifierEnRequired)?;
    require(!variant.sku.is_empty(), ValidationError::SkuRequired)?;
    require(!variant.barcode.is_empty(), ValidationError::BarcodeRequired)
}

/// Unresolved categories (None) pass here; they are already deferred.
pub fn validate_product(draft: &ProductDraft) -> Check {
    require(has_id(&draft.id), ValidationError::ProductIdRequired)?;
    require(!draft.name_id.is_empty(), ValidationError::ProductNameIdRequired)?;
    require(!draft.name_en.is_empty(), ValidationError::ProductNameEnRequired)?;
    require(has_id(&draft.brand_id), ValidationError::ProductBrandIdRequired)?;
    require(
        draft.category_l1_id.as_ref().map_or(true, has_id),
        ValidationError::ProductCategory1IdRequired,
    )?;
    require(
        draft.category_l2_id.as_ref().map_or(true, has_id),
        ValidationError::ProductCategory2IdRequired,
    )?;
    require(!draft.variants.is_empty(), ValidationError::ProductVariantsRequired)
}

pub fn validate_inventory_product(item: &InventoryProduct) -> Check {
    require(has_id(&item.id), ValidationError::InventoryProductIdRequired)?;
    require(item.price.is_some(), ValidationError::InventoryProductPriceRequired)?;
    require(has_id(&item.product_id), ValidationError::InventoryProductProductIdRequired)?;
    require(has_id(&item.variant_id), ValidationError::InventoryProductVariantIdRequired)?;
    require(
        !item.shoptree_variant_id.is_empty(),
        ValidationError::InventoryProductShoptreeVariantIdRequired,
    )
}

pub fn validate_inventory(inventory: &Inventory) -> Check {
    require(has_id(&inventory.id), ValidationError::InventoryIdRequired)?;
    require(has_id(&inventory.store_id), ValidationError::InventoryStoreIdRequired)?;
    require(
        !inventory.shoptree_location_id.is_empty(),
        ValidationError::InventoryLocationIdRequired,
    )?;
    require(!inventory.products.is_empty(), ValidationError::InventoryProductsRequired)
}
