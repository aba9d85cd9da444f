// ==========================================
// Storefront Catalog - Import Options
// ==========================================
// Responsibility: one resolved snapshot of import settings per run
// ==========================================

use crate::config::config_manager::defaults;
use crate::config::import_config_trait::{ConfigResult, ImportConfigReader};
use crate::domain::Currency;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub brand_name: String,
    pub variant_type_name: String,
    pub image_extension: String,
    pub not_applicable_marker: String,
    pub affirmative_literal: String,
    pub placeholder_stock: i32,
    pub currency: Currency,
    pub price_suffix: String,
    pub timeout_secs: u64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            brand_name: defaults::BRAND_NAME.to_string(),
            variant_type_name: defaults::VARIANT_TYPE_NAME.to_string(),
            image_extension: defaults::IMAGE_EXTENSION.to_string(),
            not_applicable_marker: defaults::NOT_APPLICABLE_MARKER.to_string(),
            affirmative_literal: defaults::AFFIRMATIVE_LITERAL.to_string(),
            placeholder_stock: defaults::PLACEHOLDER_STOCK,
            currency: Currency::Idr,
            price_suffix: defaults::PRICE_SUFFIX.to_string(),
            timeout_secs: defaults::IMPORT_TIMEOUT_SECS,
        }
    }
}

impl ImportOptions {
    /// Resolve every setting through `reader`.
    pub async fn load<R>(reader: &R) -> ConfigResult<Self>
    where
        R: ImportConfigReader + ?Sized,
    {
        Ok(Self {
            brand_name: reader.get_brand_name().await?,
            variant_type_name: reader.get_variant_type_name().await?,
            image_extension: reader.get_image_extension().await?,
            not_applicable_marker: reader.get_not_applicable_marker().await?,
            affirmative_literal: reader.get_affirmative_literal().await?,
            placeholder_stock: reader.get_placeholder_stock().await?,
            currency: reader.get_currency().await?,
            price_suffix: reader.get_price_suffix().await?,
            timeout_secs: reader.get_import_timeout_secs().await?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when `cell` is exactly the affirmative literal.
    pub fn is_affirmative(&self, cell: &str) -> bool {
        cell == self.affirmative_literal
    }

    /// None when `cell` is the not-applicable marker.
    pub fn optional_text(&self, cell: &str) -> Option<String> {
        if cell == self.not_applicable_marker {
            None
        } else {
            Some(cell.to_string())
        }
    }
}
