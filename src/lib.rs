// ==========================================
// Storefront Catalog - Core Library
// ==========================================
// Catalog bulk importers (categories, products, stores, inventory)
// and catalog reads over a document store
// Stack: Rust + SQLite (JSON documents)
// ==========================================

// ==========================================
// Modules
// ==========================================

// Domain - catalog entities and types
pub mod domain;

// Repository - document persistence
pub mod repository;

// Importer - extracts to documents
pub mod importer;

// Config - import settings
pub mod config;

// SQLite connection setup (PRAGMAs, schema)
pub mod db;

// Logging
pub mod logging;

// API - catalog reads
pub mod api;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    Category, CategoryLevel, DocumentId, Inventory, Product, ProductVariant, Store,
};

pub use importer::{
    CatalogImporter, CatalogImporterImpl, ImportError, ImportOperation, ImportReport,
};

pub use repository::{DocumentStore, SqliteDocumentStore};

pub use api::CatalogApi;

pub use config::{ConfigManager, ImportOptions};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "storefront-catalog";
