// ==========================================
// Storefront Catalog - Import Errors
// ==========================================
// Tooling: thiserror
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Required-field failures, one per field, in check order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    // ===== category (L1) =====
    #[error("category name EN is required")]
    CategoryNameEnRequired,
    #[error("category name ID is required")]
    CategoryNameIdRequired,
    #[error("abbreviation is required")]
    AbbreviationRequired,
    #[error("category image url is required")]
    CategoryImageUrlRequired,

    // ===== subcategory (L2) =====
    #[error("subcategory name EN is required")]
    SubcategoryNameEnRequired,
    #[error("subcategory name ID is required")]
    SubcategoryNameIdRequired,
    #[error("subcategory image url is required")]
    SubcategoryImageUrlRequired,

    // ===== product =====
    #[error("product id is required")]
    ProductIdRequired,
    #[error("product name ID is required")]
    ProductNameIdRequired,
    #[error("product name EN is required")]
    ProductNameEnRequired,
    #[error("product brand id is required")]
    ProductBrandIdRequired,
    #[error("product category 1 id is required")]
    ProductCategory1IdRequired,
    #[error("product category 2 id is required")]
    ProductCategory2IdRequired,
    #[error("product variants is required")]
    ProductVariantsRequired,

    // ===== product variant =====
    #[error("product variant id is required")]
    VariantIdRequired,
    #[error("shoptree variant id is required")]
    ShoptreeVariantIdRequired,
    #[error("product variant image url is required")]
    VariantImageUrlRequired,
    #[error("product variant variant type id is required")]
    VariantTypeIdRequired,
    #[error("variant value is required")]
    VariantValueRequired,
    #[error("variant quantifier ID is required")]
    VariantQuantifierIdRequired,
    #[error("variant quantifier EN is required")]
    VariantQuantifierEnRequired,
    #[error("sku is required")]
    SkuRequired,
    #[error("barcode is required")]
    BarcodeRequired,

    // ===== inventory =====
    #[error("inventory id is required")]
    InventoryIdRequired,
    #[error("inventory store id is required")]
    InventoryStoreIdRequired,
    #[error("inventory shoptree location id is required")]
    InventoryLocationIdRequired,
    #[error("inventory product is required")]
    InventoryProductsRequired,
    #[error("inventory product id is required")]
    InventoryProductIdRequired,
    #[error("inventory product price is required")]
    InventoryProductPriceRequired,
    #[error("inventory product product id is required")]
    InventoryProductProductIdRequired,
    #[error("inventory product variant id is required")]
    InventoryProductVariantIdRequired,
    #[error("inventory product shoptree variant id is required")]
    InventoryProductShoptreeVariantIdRequired,
}

/// Import error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .csv/.xlsx/.xls)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    #[error("failed to parse Excel: {0}")]
    ExcelParseError(String),

    #[error("file has no header row: {0}")]
    EmptyFile(String),

    // ===== rows =====
    #[error("error on row: {row}, error: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("invalid {entity}: {source}")]
    InvalidEntity {
        entity: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("abbreviation {abbreviation} shown is the same on two different categories, on row: {row}")]
    AbbreviationMismatch { row: usize, abbreviation: String },

    #[error("sku and category abbreviation mismatch, on row: {row} (sku: {sku}, abbreviation: {abbreviation})")]
    SkuCategoryMismatch {
        row: usize,
        sku: String,
        abbreviation: String,
    },

    #[error("found several errors while importing products ({count} deferred)")]
    DeferredErrors { count: usize },

    #[error("failed to find product with EN name: {name}, on row: {row}")]
    ProductNotFound { row: usize, name: String },

    #[error("failed to find product variant with shoptree variant id: {shoptree_variant_id}, on row: {row}")]
    VariantNotFound {
        row: usize,
        shoptree_variant_id: String,
    },

    // ===== reference data =====
    #[error("no {0} found in our database")]
    MissingReferenceData(&'static str),

    #[error("store already exist in our database")]
    StoreAlreadyExists,

    #[error("nothing to import into {collection}")]
    NothingToImport { collection: &'static str },

    // ===== operation =====
    #[error("{0} importer is not implemented")]
    Unimplemented(&'static str),

    #[error("failed to execute {operation}: {source}")]
    Store {
        operation: String,
        #[source]
        source: RepositoryError,
    },

    #[error("import exceeded its deadline of {0}s")]
    DeadlineExceeded(u64),

    #[error("failed to load import config: {0}")]
    Config(String),

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    pub fn invalid_row(row: usize, source: ValidationError) -> Self {
        ImportError::InvalidRow { row, source }
    }

    /// Wrap a store failure with the operation that hit it.
    pub fn store(operation: impl Into<String>) -> impl FnOnce(RepositoryError) -> Self {
        let operation = operation.into();
        move |source| ImportError::Store { operation, source }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_row_message_names_row_and_field() {
        let err = ImportError::invalid_row(3, ValidationError::CategoryNameEnRequired);
        assert_eq!(err.to_string(), "error on row: 3, error: category name EN is required");
    }

    #[test]
    fn test_store_wrapper_keeps_operation() {
        let err = ImportError::store("BulkWrite categories")(RepositoryError::InternalError(
            "boom".to_string(),
        ));
        assert!(err.to_string().starts_with("failed to execute BulkWrite categories"));
    }
}
