// ==========================================
// Storefront Catalog - Config Manager
// ==========================================
// Responsibility: load and override import settings
// Storage: config_kv table (key-value + scope)
// Lookup: database-name scope, then 'global', then default
// ==========================================

use crate::config::import_config_trait::{ConfigResult, ImportConfigReader};
use crate::db::{configure_sqlite_connection, init_schema, open_sqlite_connection};
use crate::domain::Currency;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

pub const GLOBAL_SCOPE: &str = "global";

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
    scope_id: Option<String>,
}

impl ConfigManager {
    /// Open a ConfigManager on its own connection.
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            scope_id: None,
        })
    }

    /// Share an existing connection. PRAGMAs are re-applied (idempotent).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;
            configure_sqlite_connection(&conn_guard)?;
            init_schema(&conn_guard)?;
        }

        Ok(Self {
            conn,
            scope_id: None,
        })
    }

    /// Read overrides for `scope_id` (the database name) before 'global'.
    pub fn with_scope(mut self, scope_id: impl Into<String>) -> Self {
        self.scope_id = Some(scope_id.into());
        self
    }

    fn read_scoped(&self, scope_id: &str, key: &str) -> ConfigResult<Option<String>> {
        let conn = self.conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![scope_id, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Effective value for `key`.
    ///
    /// # Returns
    /// - Some(String): scoped value if set, else global value
    /// - None: not configured
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        if let Some(scope_id) = &self.scope_id {
            if let Some(value) = self.read_scoped(scope_id, key)? {
                return Ok(Some(value));
            }
        }
        self.read_scoped(GLOBAL_SCOPE, key)
    }

    /// Upsert a value into `scope_id`.
    pub fn set_config_value(&self, scope_id: &str, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self.conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![scope_id, key, value],
        )?;
        Ok(())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr + std::fmt::Display,
    {
        let value = self.get_config_or_default(key, &default.to_string())?;
        Ok(value.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(config_key = key, raw_value = %value, "unparsable config value, using default");
            default
        }))
    }
}

// ==========================================
// ImportConfigReader impl
// ==========================================
#[async_trait]
impl ImportConfigReader for ConfigManager {
    async fn get_brand_name(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::BRAND_NAME, defaults::BRAND_NAME)
    }

    async fn get_variant_type_name(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::VARIANT_TYPE_NAME, defaults::VARIANT_TYPE_NAME)
    }

    async fn get_image_extension(&self) -> ConfigResult<String> {
        let ext = self.get_config_or_default(config_keys::IMAGE_EXTENSION, defaults::IMAGE_EXTENSION)?;
        Ok(ext.trim_start_matches('.').to_string())
    }

    async fn get_not_applicable_marker(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::NOT_APPLICABLE_MARKER, defaults::NOT_APPLICABLE_MARKER)
    }

    async fn get_affirmative_literal(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::AFFIRMATIVE_LITERAL, defaults::AFFIRMATIVE_LITERAL)
    }

    async fn get_placeholder_stock(&self) -> ConfigResult<i32> {
        self.get_parsed_or_default(config_keys::PLACEHOLDER_STOCK, defaults::PLACEHOLDER_STOCK)
    }

    async fn get_currency(&self) -> ConfigResult<Currency> {
        let value = self.get_config_or_default(config_keys::CURRENCY, "IDR")?;
        Ok(Currency::from_str(&value).unwrap_or_else(|_| {
            tracing::warn!(config_key = config_keys::CURRENCY, raw_value = %value, "unknown currency, using IDR");
            Currency::Idr
        }))
    }

    async fn get_price_suffix(&self) -> ConfigResult<String> {
        // empty suffix is legal, so no blank-means-default here
        Ok(self
            .get_config_value(config_keys::PRICE_SUFFIX)?
            .unwrap_or_else(|| defaults::PRICE_SUFFIX.to_string()))
    }

    async fn get_import_timeout_secs(&self) -> ConfigResult<u64> {
        self.get_parsed_or_default(config_keys::IMPORT_TIMEOUT_SECS, defaults::IMPORT_TIMEOUT_SECS)
    }
}

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // reference data
    pub const BRAND_NAME: &str = "import.brand_name";
    pub const VARIANT_TYPE_NAME: &str = "import.variant_type_name";

    // cell conventions
    pub const IMAGE_EXTENSION: &str = "import.image_extension";
    pub const NOT_APPLICABLE_MARKER: &str = "import.not_applicable_marker";
    pub const AFFIRMATIVE_LITERAL: &str = "import.affirmative_literal";

    // inventory stub
    pub const PLACEHOLDER_STOCK: &str = "inventory.placeholder_stock";
    pub const CURRENCY: &str = "inventory.currency";
    pub const PRICE_SUFFIX: &str = "inventory.price_suffix";

    pub const IMPORT_TIMEOUT_SECS: &str = "import.timeout_secs";
}

pub mod defaults {
    pub const BRAND_NAME: &str = "Dropezy";
    pub const VARIANT_TYPE_NAME: &str = "UOM";
    pub const IMAGE_EXTENSION: &str = "webp";
    pub const NOT_APPLICABLE_MARKER: &str = "#N/A";
    pub const AFFIRMATIVE_LITERAL: &str = "yes";
    pub const PLACEHOLDER_STOCK: i32 = 10;
    pub const PRICE_SUFFIX: &str = "00";
    pub const IMPORT_TIMEOUT_SECS: u64 = 60;
}
