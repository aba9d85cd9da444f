// ==========================================
// Storefront Catalog - Import Config Reader Trait
// ==========================================
// Responsibility: read-side interface for import settings
// Rule: no writes, no catalog rules
// ==========================================

use crate::domain::Currency;
use async_trait::async_trait;
use std::error::Error;

pub type ConfigResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// Implementor: ConfigManager (config_kv table)
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    // ===== reference data =====

    /// Brand attached to every imported product.
    ///
    /// # Default
    /// - "Dropezy"
    async fn get_brand_name(&self) -> ConfigResult<String>;

    /// Variant type attached to every imported variant.
    ///
    /// # Default
    /// - "UOM"
    async fn get_variant_type_name(&self) -> ConfigResult<String>;

    // ===== cell conventions =====

    /// Extension of derived image URLs (`<stem>-0.<ext>`).
    ///
    /// # Default
    /// - "webp"
    async fn get_image_extension(&self) -> ConfigResult<String>;

    /// Cell value meaning "no value" for optional text columns.
    ///
    /// # Default
    /// - "#N/A"
    async fn get_not_applicable_marker(&self) -> ConfigResult<String>;

    /// Cell value that turns a boolean column on (default variant, sellable).
    ///
    /// # Default
    /// - "yes"
    async fn get_affirmative_literal(&self) -> ConfigResult<String>;

    // ===== inventory stub =====

    /// # Default
    /// - 10
    async fn get_placeholder_stock(&self) -> ConfigResult<i32>;

    /// # Default
    /// - IDR
    async fn get_currency(&self) -> ConfigResult<Currency>;

    /// Appended to `selling_price` to form the minor-unit amount.
    ///
    /// # Default
    /// - "00"
    async fn get_price_suffix(&self) -> ConfigResult<String>;

    // ===== run =====

    /// Deadline for a whole import run, in seconds.
    ///
    /// # Default
    /// - 60
    async fn get_import_timeout_secs(&self) -> ConfigResult<u64>;
}
