// ==========================================
// Storefront Catalog - Domain Layer
// ==========================================
// Responsibility: catalog entities and shared types
// No data access, no import logic
// ==========================================

pub mod category;
pub mod inventory;
pub mod product;
pub mod reference;
pub mod types;

pub use category::Category;
pub use inventory::{Amount, Inventory, InventoryProduct};
pub use product::{Product, ProductVariant};
pub use reference::{Brand, NamedReference, Store, VariantType};
pub use types::{
    derived_image_url, CategoryLevel, Currency, DocumentId, ProductStatus, VariantStatus,
};
