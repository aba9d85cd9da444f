// ==========================================
// Storefront Catalog - API Layer
// ==========================================
// Responsibility: read-side catalog API over the document store
// ==========================================

pub mod catalog_api;
pub mod error;

pub use catalog_api::{CatalogApi, CategoryRef, CategoryView, ProductView};
pub use error::{ApiError, ApiResult};
