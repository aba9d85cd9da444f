// ==========================================
// Storefront Catalog - Import Layer
// ==========================================
// Responsibility: turn catalog extracts into stored documents
// Supports: CSV, Excel
// ==========================================

pub mod bulk_writer;
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod category_builder;
pub mod error;
pub mod error_aggregator;
pub mod file_parser;
pub mod header_index;
pub mod inventory_builder;
pub mod product_builder;
pub mod reference_resolver;
pub mod validator;

pub use bulk_writer::BulkWriter;
pub use catalog_importer_impl::CatalogImporterImpl;
pub use catalog_importer_trait::{
    CatalogImporter, FileParser, ImportOperation, ImportReport, RawRow, RawTable,
};
pub use category_builder::{build_category_tree, CategoryBuilder};
pub use error::{ImportError, ImportResult, ValidationError};
pub use error_aggregator::ErrorAggregator;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use header_index::{CategoryHeaders, InventoryHeaders, ProductHeaders};
pub use inventory_builder::build_inventory;
pub use product_builder::{build_products, ProductBuildOutput, ProductBuilder, ProductDraft};
pub use reference_resolver::ReferenceResolver;
