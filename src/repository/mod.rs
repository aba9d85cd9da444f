// ==========================================
// Storefront Catalog - Repository Layer
// ==========================================
// Responsibility: document persistence, hides the database
// Rule: repositories carry no catalog rules
// Rule: every query is parameterized
// ==========================================

pub mod document_store;
pub mod document_store_impl;
pub mod error;

pub use document_store::{find_all_as, find_one_as, to_document, DocumentStore, Filter, ID_FIELD};
pub use document_store_impl::SqliteDocumentStore;
pub use error::{RepositoryError, RepositoryResult};

/// Collection names.
pub mod collections {
    pub const CATEGORY: &str = "category";
    pub const PRODUCT: &str = "product";
    pub const BRAND: &str = "brand";
    pub const VARIANT_TYPE: &str = "variant_type";
    pub const STORE: &str = "store";
    pub const INVENTORY: &str = "inventory";
}
