// ==========================================
// Storefront Catalog - Product Builder
// ==========================================
// Responsibility: fold flat product rows into products with variants
// Rules:
// - a product is keyed by English name, first occurrence wins
// - each accepted row adds one variant
// - unresolved categories and bad max-order cells are deferred
// - SKU/abbreviation mismatch and invalid fields abort immediately
// ==========================================

use crate::config::ImportOptions;
use crate::domain::{
    derived_image_url, Category, DocumentId, Product, ProductVariant, VariantStatus,
};
use crate::importer::catalog_importer_trait::{RawRow, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::error_aggregator::ErrorAggregator;
use crate::importer::header_index::ProductHeaders;
use crate::importer::validator::{validate_product, validate_variant};
use std::collections::HashMap;
use tracing::{debug, warn};

// ==========================================
// ProductDraft
// ==========================================
// Product under construction; categories may still be unresolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: DocumentId,
    pub name_en: String,
    pub name_id: String,
    pub description_en: Option<String>,
    pub description_id: Option<String>,
    pub brand_id: DocumentId,
    pub category_l1_id: Option<DocumentId>,
    pub category_l2_id: Option<DocumentId>,
    pub variants: Vec<ProductVariant>,
}

impl ProductDraft {
    /// Only valid after the deferred-error gate.
    pub fn into_product(self) -> ImportResult<Product> {
        let category_l1_id = self.category_l1_id.ok_or_else(|| {
            ImportError::InternalError(format!(
                "product {} reached the writer without a level 1 category",
                self.name_en
            ))
        })?;

        Ok(Product {
            id: self.id,
            name_en: self.name_en,
            name_id: self.name_id,
            description_en: self.description_en,
            description_id: self.description_id,
            brand_id: self.brand_id,
            category_l1_id,
            category_l2_id: self.category_l2_id,
            variants: self.variants,
        })
    }
}

// ==========================================
// ProductBuilder
// ==========================================
pub struct ProductBuilder<'a> {
    headers: ProductHeaders,
    options: &'a ImportOptions,
    brand_id: DocumentId,
    variant_type_id: DocumentId,
    parents_by_name: HashMap<&'a str, &'a Category>,
    drafts: Vec<ProductDraft>,
    by_name: HashMap<String, usize>,
    deferred: ErrorAggregator,
    skipped: usize,
}

impl<'a> ProductBuilder<'a> {
    pub fn new(
        headers: ProductHeaders,
        options: &'a ImportOptions,
        categories: &'a [Category],
        brand_id: DocumentId,
        variant_type_id: DocumentId,
    ) -> Self {
        let mut parents_by_name = HashMap::new();
        for category in categories {
            parents_by_name
                .entry(category.name_en.as_str())
                .or_insert(category);
        }

        Self {
            headers,
            options,
            brand_id,
            variant_type_id,
            parents_by_name,
            drafts: Vec::new(),
            by_name: HashMap::new(),
            deferred: ErrorAggregator::new(),
            skipped: 0,
        }
    }

    pub fn add_row(&mut self, row: &RawRow) -> ImportResult<()> {
        let h = self.headers;
        let number = row.number;

        // rows without image or barcode never become variants
        if row.cell(h.image_url).is_empty() {
            warn!(row = number, "image url on row: {}, is empty, skipping product", number);
            self.skipped += 1;
            return Ok(());
        }
        if row.cell(h.barcode).is_empty() {
            warn!(row = number, "barcode on row: {}, is empty, skipping product", number);
            self.skipped += 1;
            return Ok(());
        }

        let maximum_order = match row.cell(h.maximum_order).parse::<i32>() {
            Ok(value) => value,
            Err(e) => {
                self.deferred.defer(
                    number,
                    format!("failed to convert maximum order on row: {}, err: {}", number, e),
                );
                0
            }
        };

        let variant = self.build_variant(row, maximum_order);
        validate_variant(&variant).map_err(|e| ImportError::invalid_row(number, e))?;

        let name_en = row.cell(h.product_name_en);
        if let Some(&idx) = self.by_name.get(name_en) {
            self.drafts[idx].variants.push(variant);
            return Ok(());
        }

        let (category_l1_id, category_l2_id) = self.resolve_categories(row, &variant.sku)?;

        let draft = ProductDraft {
            id: DocumentId::generate(),
            name_en: name_en.to_string(),
            name_id: row.cell(h.product_name_id).to_string(),
            description_en: self.options.optional_text(row.cell(h.description_en)),
            description_id: self.options.optional_text(row.cell(h.description_id)),
            brand_id: self.brand_id,
            category_l1_id,
            category_l2_id,
            variants: vec![variant],
        };
        validate_product(&draft).map_err(|e| ImportError::invalid_row(number, e))?;

        debug!(row = number, product = %draft.name_en, "new product");
        self.by_name.insert(draft.name_en.clone(), self.drafts.len());
        self.drafts.push(draft);
        Ok(())
    }

    fn build_variant(&self, row: &RawRow, maximum_order: i32) -> ProductVariant {
        let h = self.headers;
        let sku = row.cell(h.sku);
        let variant_status = if self.options.is_affirmative(row.cell(h.default_variant)) {
            VariantStatus::Default
        } else {
            VariantStatus::Unspecified
        };

        ProductVariant {
            id: DocumentId::generate(),
            shoptree_variant_id: row.cell(h.shoptree_variant_id).to_string(),
            images_urls: vec![derived_image_url(sku, &self.options.image_extension)],
            variant_type_id: self.variant_type_id,
            variant_value: row.cell(h.variant_value).to_string(),
            variant_quantifier_en: row.cell(h.variant_quantifier_en).to_string(),
            variant_quantifier_id: row.cell(h.variant_quantifier_id).to_string(),
            maximum_order,
            sku: sku.to_string(),
            barcode: row.cell(h.barcode).to_string(),
            variant_status,
        }
    }

    /// L1 by English name, then L2 among its children; misses are deferred.
    fn resolve_categories(
        &mut self,
        row: &RawRow,
        sku: &str,
    ) -> ImportResult<(Option<DocumentId>, Option<DocumentId>)> {
        let h = self.headers;
        let number = row.number;
        let l1_name = row.cell(h.category_name_en);
        let l2_name = row.cell(h.subcategory_name_en);

        let parent = self.parents_by_name.get(l1_name).copied();
        let Some(parent) = parent else {
            self.deferred.defer(
                number,
                format!(
                    "failed to find level 1 category with EN name: {}, on row: {}",
                    l1_name, number
                ),
            );
            // no abbreviation to enforce against
            return Ok((None, None));
        };

        let category_l2_id = if parent.child_categories.is_empty() {
            None
        } else {
            match parent.child_by_name_en(l2_name) {
                Some(child) => Some(child.id),
                None => {
                    self.deferred.defer(
                        number,
                        format!(
                            "failed to find level 2 category with EN name: {}, on row: {}",
                            l2_name, number
                        ),
                    );
                    None
                }
            }
        };

        if !sku.contains(parent.abbreviation.as_str()) {
            return Err(ImportError::SkuCategoryMismatch {
                row: number,
                sku: sku.to_string(),
                abbreviation: parent.abbreviation.clone(),
            });
        }

        Ok((Some(parent.id), category_l2_id))
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Pass the gate and hand back finished products.
    pub fn finish(self) -> ImportResult<Vec<Product>> {
        self.deferred.into_result()?;
        self.drafts
            .into_iter()
            .map(ProductDraft::into_product)
            .collect()
    }
}

/// Products folded from a whole table, plus the number of skipped rows.
pub struct ProductBuildOutput {
    pub products: Vec<Product>,
    pub skipped: usize,
}

pub fn build_products(
    table: &RawTable,
    options: &ImportOptions,
    categories: &[Category],
    brand_id: DocumentId,
    variant_type_id: DocumentId,
) -> ImportResult<ProductBuildOutput> {
    let mut builder = ProductBuilder::new(
        ProductHeaders::from_header_row(&table.header),
        options,
        categories,
        brand_id,
        variant_type_id,
    );
    for row in &table.rows {
        builder.add_row(row)?;
    }
    let skipped = builder.skipped();
    let products = builder.finish()?;
    Ok(ProductBuildOutput { products, skipped })
}
