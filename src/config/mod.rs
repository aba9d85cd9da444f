// ==========================================
// Storefront Catalog - Config Layer
// ==========================================
// Responsibility: import settings with scoped overrides
// Storage: config_kv table
// ==========================================

pub mod config_manager;
pub mod import_config_trait;
pub mod import_options;

pub use config_manager::{config_keys, ConfigManager, GLOBAL_SCOPE};
pub use import_config_trait::{ConfigResult, ImportConfigReader};
pub use import_options::ImportOptions;
