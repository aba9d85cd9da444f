// ==========================================
// Storefront Catalog - Inventory Builder
// ==========================================
// Responsibility: one placeholder inventory for one store,
//                 priced from the product extract
// Rule: every row must match a persisted product and variant
// ==========================================

use crate::config::ImportOptions;
use crate::domain::{
    Amount, DocumentId, Inventory, InventoryProduct, Product, ProductStatus, Store,
};
use crate::importer::catalog_importer_trait::RawTable;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_index::InventoryHeaders;
use crate::importer::validator::{validate_inventory, validate_inventory_product};
use std::collections::HashMap;

pub fn build_inventory(
    table: &RawTable,
    options: &ImportOptions,
    store: &Store,
    products: &[Product],
) -> ImportResult<Inventory> {
    let h = InventoryHeaders::from_header_row(&table.header);

    let mut by_name: HashMap<&str, &Product> = HashMap::new();
    for product in products {
        by_name.entry(product.name_en.as_str()).or_insert(product);
    }

    let mut inventory = Inventory {
        id: DocumentId::generate(),
        store_id: store.id,
        shoptree_location_id: store.shoptree_location_id.clone(),
        products: Vec::with_capacity(table.rows.len()),
    };

    for row in &table.rows {
        let name = row.cell(h.product_name_en);
        let product = by_name
            .get(name)
            .copied()
            .ok_or_else(|| ImportError::ProductNotFound {
                row: row.number,
                name: name.to_string(),
            })?;

        let shoptree_variant_id = row.cell(h.shoptree_variant_id);
        let variant = product
            .variants
            .iter()
            .find(|v| v.shoptree_variant_id == shoptree_variant_id)
            .ok_or_else(|| ImportError::VariantNotFound {
                row: row.number,
                shoptree_variant_id: shoptree_variant_id.to_string(),
            })?;

        let status = if options.is_affirmative(row.cell(h.sellable)) {
            ProductStatus::Enabled
        } else {
            ProductStatus::Disabled
        };

        let item = InventoryProduct {
            id: DocumentId::generate(),
            stock: options.placeholder_stock,
            price: Some(Amount {
                num: format!("{}{}", row.cell(h.selling_price), options.price_suffix),
                cur: options.currency,
            }),
            product_id: product.id,
            variant_id: variant.id,
            shoptree_variant_id: variant.shoptree_variant_id.clone(),
            status,
        };
        validate_inventory_product(&item).map_err(|e| ImportError::invalid_row(row.number, e))?;

        inventory.products.push(item);
    }

    validate_inventory(&inventory).map_err(|source| ImportError::InvalidEntity {
        entity: "inventory",
        source,
    })?;
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, ProductVariant, VariantStatus};
    use crate::importer::catalog_importer_trait::RawRow;
    use crate::importer::error::ValidationError;

    fn product(name: &str, variant_ids: &[&str]) -> Product {
        Product {
            id: DocumentId::generate(),
            name_en: name.to_string(),
            name_id: name.to_string(),
            description_en: None,
            description_id: None,
            brand_id: DocumentId::generate(),
            category_l1_id: DocumentId::generate(),
            category_l2_id: None,
            variants: variant_ids
                .iter()
                .map(|id| ProductVariant {
                    id: DocumentId::generate(),
                    shoptree_variant_id: id.to_string(),
                    images_urls: vec!["a-0.webp".to_string()],
                    variant_type_id: DocumentId::generate(),
                    variant_value: "1".to_string(),
                    variant_quantifier_en: "pc".to_string(),
                    variant_quantifier_id: "pc".to_string(),
                    maximum_order: 0,
                    sku: "DRK-1".to_string(),
                    barcode: "1".to_string(),
                    variant_status: VariantStatus::Unspecified,
                })
                .collect(),
        }
    }

    fn table(rows: &[[&str; 4]]) -> RawTable {
        RawTable {
            header: InventoryHeaders::RECOGNIZED.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, cells)| RawRow {
                    number: i + 2,
                    cells: cells.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_builds_priced_placeholder_stock() {
        let store = Store::placeholder();
        let products = vec![product("Cola", &["st-1", "st-2"])];
        let t = table(&[["Cola", "st-2", "yes", "5000"], ["Cola", "st-1", "no", "4500"]]);

        let inv = build_inventory(&t, &ImportOptions::default(), &store, &products).unwrap();

        assert_eq!(inv.store_id, store.id);
        assert_eq!(inv.shoptree_location_id, Store::PLACEHOLDER_LOCATION_ID);
        assert_eq!(inv.products.len(), 2);

        let first = &inv.products[0];
        assert_eq!(first.stock, 10);
        assert_eq!(first.variant_id, products[0].variants[1].id);
        assert_eq!(first.status, ProductStatus::Enabled);
        assert_eq!(
            first.price,
            Some(Amount {
                num: "500000".to_string(),
                cur: Currency::Idr
            })
        );
        assert_eq!(inv.products[1].status, ProductStatus::Disabled);
    }

    #[test]
    fn test_unknown_product_fails_with_row() {
        let store = Store::placeholder();
        let products = vec![product("Cola", &["st-1"])];
        let t = table(&[["Tea", "st-1", "yes", "1"]]);

        match build_inventory(&t, &ImportOptions::default(), &store, &products) {
            Err(ImportError::ProductNotFound { row, name }) => {
                assert_eq!(row, 2);
                assert_eq!(name, "Tea");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_variant_fails() {
        let store = Store::placeholder();
        let products = vec![product("Cola", &["st-1"])];
        let t = table(&[["Cola", "st-9", "yes", "1"]]);

        assert!(matches!(
            build_inventory(&t, &ImportOptions::default(), &store, &products),
            Err(ImportError::VariantNotFound { row: 2, .. })
        ));
    }

    #[test]
    fn test_no_rows_fails_inventory_validation() {
        let store = Store::placeholder();
        let products = vec![product("Cola", &["st-1"])];

        match build_inventory(&table(&[]), &ImportOptions::default(), &store, &products) {
            Err(ImportError::InvalidEntity { source, .. }) => {
                assert_eq!(source, ValidationError::InventoryProductsRequired)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
