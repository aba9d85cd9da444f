// ==========================================
// Product import integration tests
// ==========================================
// Target: categories + brand + variant type -> product collection
// ==========================================


use storefront_catalog::domain::{Category, NamedReference, Product, VariantStatus};
use storefront_catalog::importer::{CatalogImporter, ImportError};
use storefront_catalog::logging;
use storefront_catalog::repository::{collections, find_all_as, DocumentStore, Filter};
use test_helpers::{create_test_store, fixture, importer, write_csv, PRODUCT_HEADER};

async fn seed_categories(store: &std::sync::Arc<storefront_catalog::SqliteDocumentStore>) {
    importer(store)
        .import_categories(&fixture("category/categories.csv"))
        .await
        .expect("Failed to seed categories");
}

#[tokio::test]
async fn test_import_products_groups_variants() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    seed_categories(&store).await;

    let report = importer(&store)
        .import_products(&fixture("product/products.csv"))
        .await
        .expect("product import should succeed");

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.documents_written, 3);

    let categories: Vec<Category> =
        find_all_as(store.as_ref(), collections::CATEGORY, &Filter::all())
            .await
            .unwrap();
    let drinks = &categories[0];
    let soda = drinks.child_by_name_en("Soda").expect("Soda should exist");

    let products: Vec<Product> = find_all_as(store.as_ref(), collections::PRODUCT, &Filter::all())
        .await
        .unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name_en.as_str()).collect();
    assert_eq!(names, vec!["Cola", "Orange Juice", "Potato Chips"]);

    let cola = &products[0];
    assert_eq!(cola.name_id, "Kola");
    assert_eq!(cola.category_l1_id, drinks.id);
    assert_eq!(cola.category_l2_id, Some(soda.id));
    assert_eq!(cola.description_en.as_deref(), Some("Soda drink"));
    assert_eq!(cola.variants.len(), 2);
    assert_eq!(cola.variants[0].variant_status, VariantStatus::Default);
    assert_eq!(cola.variants[1].variant_status, VariantStatus::Unspecified);
    assert_eq!(cola.variants[0].images_urls, vec!["DRK-SOD-001-0.webp"]);
    assert_eq!(cola.variants[0].maximum_order, 5);

    let juice = &products[1];
    assert!(juice.description_en.is_none());
    assert!(juice.description_id.is_none());

    let brands: Vec<NamedReference> =
        find_all_as(store.as_ref(), collections::BRAND, &Filter::all())
            .await
            .unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "Dropezy");
    assert!(products.iter().all(|p| p.brand_id == brands[0].id));

    let variant_types: Vec<NamedReference> =
        find_all_as(store.as_ref(), collections::VARIANT_TYPE, &Filter::all())
            .await
            .unwrap();
    assert_eq!(variant_types.len(), 1);
    assert_eq!(variant_types[0].name, "UOM");
    assert_eq!(cola.variants[0].variant_type_id, variant_types[0].id);
}

#[tokio::test]
async fn test_brand_and_variant_type_are_reused() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    seed_categories(&store).await;

    let importer = importer(&store);
    importer
        .import_products(&fixture("product/products.csv"))
        .await
        .expect("first import should succeed");
    importer
        .import_products(&fixture("product/products.csv"))
        .await
        .expect("second import should succeed");

    let brands = store
        .find_many(collections::BRAND, &Filter::all())
        .await
        .unwrap();
    let variant_types = store
        .find_many(collections::VARIANT_TYPE, &Filter::all())
        .await
        .unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(variant_types.len(), 1);
}

#[tokio::test]
async fn test_sku_outside_category_abbreviation_fails() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    seed_categories(&store).await;

    let file = write_csv(&[
        PRODUCT_HEADER,
        "st-201,SNK-SOD-001,Lemonade,Limun,330,ml,ml,5,899201,Drinks,Soda,a,b,https://cdn.example.com/l.jpg,yes,yes,6000",
    ])
    .expect("Failed to write csv");

    let err = importer(&store)
        .import_products(file.path())
        .await
        .expect_err("sku mismatch should fail");

    match err {
        ImportError::SkuCategoryMismatch {
            row,
            sku,
            abbreviation,
        } => {
            assert_eq!(row, 2);
            assert_eq!(sku, "SNK-SOD-001");
            assert_eq!(abbreviation, "DRK");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_deferred_errors_block_every_write() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    seed_categories(&store).await;

    let file = write_csv(&[
        PRODUCT_HEADER,
        "st-301,DRK-SOD-009,Tonic,Tonik,330,ml,ml,5,899301,Drinks,Soda,a,b,https://cdn.example.com/t.jpg,yes,yes,6000",
        "st-302,FRZ-ICE-001,Ice Cream,Es Krim,1,pc,pc,2,899302,Frozen,Ice,a,b,https://cdn.example.com/i.jpg,yes,yes,15000",
        "st-303,DRK-SOD-010,Ginger Ale,Jahe,330,ml,ml,lots,899303,Drinks,Soda,a,b,https://cdn.example.com/g.jpg,yes,yes,7000",
    ])
    .expect("Failed to write csv");

    let err = importer(&store)
        .import_products(file.path())
        .await
        .expect_err("deferred errors should fail the import");
    assert!(matches!(err, ImportError::DeferredErrors { count: 2 }));

    let products = store
        .find_many(collections::PRODUCT, &Filter::all())
        .await
        .unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_products_require_categories() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");

    let err = importer(&store)
        .import_products(&fixture("product/products.csv"))
        .await
        .expect_err("import without categories should fail");
    assert!(matches!(err, ImportError::MissingReferenceData("categories")));
    assert_eq!(err.to_string(), "no categories found in our database");
}

#[tokio::test]
async fn test_literals_are_compared_as_read() {
    logging::init_test();
    let (_temp_file, store) = create_test_store().expect("Failed to create test store");
    seed_categories(&store).await;

    // " yes" is not the default literal and "#N/A " is not the marker
    let file = write_csv(&[
        PRODUCT_HEADER,
        "st-401,DRK-SOD-020,Root Beer,Bir Akar,330,ml,ml,5,899401,Drinks,Soda,#N/A ,#N/A, https://cdn.example.com/r.jpg, yes,yes,6000",
    ])
    .expect("Failed to write csv");

    importer(&store)
        .import_products(file.path())
        .await
        .expect("product import should succeed");

    let products: Vec<Product> = find_all_as(store.as_ref(), collections::PRODUCT, &Filter::all())
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.description_id.as_deref(), Some("#N/A "));
    assert!(product.description_en.is_none());
    assert_eq!(product.variants[0].variant_status, VariantStatus::Unspecified);
}
