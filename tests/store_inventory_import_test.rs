// ==========================================
// Store + inventory import integration tests
// ==========================================


use std::path::Path;
use storefront_catalog::domain::{Currency, Inventory, ProductStatus, Product, Store};
use storefront_catalog::importer::{CatalogImporter, ImportError, ImportOperation};
use storefront_catalog::logging;
use storefront_catalog::repository::{collections, find_all_as, Filter};
use test_helpers::{create_test_store, fixture, importer};

#[tokio::test]
async fn test_store_import_inserts_placeholder_once() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    let importer = importer(&store);

    // the path is never read
    let report = importer
        .run(ImportOperation::Store, Path::new("unused.csv"))
        .await
        .expect("first store import should succeed");
    assert_eq!(report.documents_written, 1);

    let stores: Vec<Store> = find_all_as(store.as_ref(), collections::STORE, &Filter::all())
        .await
        .unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].name, Store::PLACEHOLDER_NAME);
    assert_eq!(stores[0].shoptree_location_id, Store::PLACEHOLDER_LOCATION_ID);
    assert_eq!(stores[0].location_code, Store::PLACEHOLDER_LOCATION_CODE);

    let err = importer
        .run(ImportOperation::Store, Path::new("unused.csv"))
        .await
        .expect_err("second store import should fail");
    assert!(matches!(err, ImportError::StoreAlreadyExists));
}

#[tokio::test]
async fn test_brand_import_is_unimplemented() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");

    let err = importer(&store)
        .run(ImportOperation::Brand, &fixture("product/products.csv"))
        .await
        .expect_err("brand import should fail");
    assert!(matches!(err, ImportError::Unimplemented("brand")));
}

#[tokio::test]
async fn test_inventory_for_first_store() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    let importer = importer(&store);

    importer
        .import_categories(&fixture("category/categories.csv"))
        .await
        .expect("Failed to import categories");
    importer
        .import_products(&fixture("product/products.csv"))
        .await
        .expect("Failed to import products");
    importer
        .import_store(Path::new(""))
        .await
        .expect("Failed to import store");

    let report = importer
        .import_inventories(&fixture("product/inventory.csv"))
        .await
        .expect("inventory import should succeed");
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.documents_written, 1);

    let stores: Vec<Store> = find_all_as(store.as_ref(), collections::STORE, &Filter::all())
        .await
        .unwrap();
    let products: Vec<Product> = find_all_as(store.as_ref(), collections::PRODUCT, &Filter::all())
        .await
        .unwrap();
    let inventories: Vec<Inventory> =
        find_all_as(store.as_ref(), collections::INVENTORY, &Filter::all())
            .await
            .unwrap();
    assert_eq!(inventories.len(), 1);

    let inventory = &inventories[0];
    assert_eq!(inventory.store_id, stores[0].id);
    assert_eq!(inventory.shoptree_location_id, Store::PLACEHOLDER_LOCATION_ID);
    assert_eq!(inventory.products.len(), 4);

    let cola = &products[0];
    let first = &inventory.products[0];
    assert_eq!(first.product_id, cola.id);
    assert_eq!(first.variant_id, cola.variants[0].id);
    assert_eq!(first.shoptree_variant_id, "st-101");
    assert_eq!(first.stock, 10);
    assert_eq!(first.status, ProductStatus::Enabled);
    let price = first.price.as_ref().expect("price should be set");
    assert_eq!(price.num, "500000");
    assert_eq!(price.cur, Currency::Idr);

    assert_eq!(inventory.products[3].status, ProductStatus::Disabled);
}

#[tokio::test]
async fn test_inventory_requires_store() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");

    let err = importer(&store)
        .import_inventories(&fixture("product/inventory.csv"))
        .await
        .expect_err("inventory without a store should fail");
    assert!(matches!(err, ImportError::MissingReferenceData("stores")));
}

#[tokio::test]
async fn test_inventory_with_unknown_product_fails() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    let importer = importer(&store);

    importer
        .import_categories(&fixture("category/categories.csv"))
        .await
        .expect("Failed to import categories");
    importer
        .import_products(&fixture("product/products.csv"))
        .await
        .expect("Failed to import products");
    importer
        .import_store(Path::new(""))
        .await
        .expect("Failed to import store");

    // Corn Chips was skipped for its empty barcode
    let err = importer
        .import_inventories(&fixture("product/products.csv"))
        .await
        .expect_err("unknown product should fail");
    match err {
        ImportError::ProductNotFound { row, name } => {
            assert_eq!(row, 6);
            assert_eq!(name, "Corn Chips");
        }
        other => panic!("unexpected error: {}", other),
    }

    let inventories = find_all_as::<Inventory, _>(store.as_ref(), collections::INVENTORY, &Filter::all())
        .await
        .unwrap();
    assert!(inventories.is_empty());
}
