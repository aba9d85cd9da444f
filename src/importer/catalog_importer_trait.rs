// ==========================================
// Storefront Catalog - Importer Traits
// ==========================================
// Responsibility: importer interfaces and their shared records
// No implementations here
// ==========================================

use crate::config::ImportOptions;
use crate::importer::error::{ImportError, ImportResult};
use crate::repository::collections;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ==========================================
// Raw table
// ==========================================

/// One data row. `number` is the 1-based line in the source, header = 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub number: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell at `idx`, "" when the row is short.
    pub fn cell(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// Implementors: CsvParser, ExcelParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// Read header + data rows.
    ///
    /// # Errors
    /// - FileNotFound / UnsupportedFormat / EmptyFile
    /// - CsvParseError / ExcelParseError on malformed input
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// ImportOperation
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ImportOperation {
    Category,
    Brand,
    Product,
    Store,
    Inventory,
}

impl ImportOperation {
    /// Collection the operation writes.
    pub fn collection(&self) -> &'static str {
        match self {
            ImportOperation::Category => collections::CATEGORY,
            ImportOperation::Brand => collections::BRAND,
            ImportOperation::Product => collections::PRODUCT,
            ImportOperation::Store => collections::STORE,
            ImportOperation::Inventory => collections::INVENTORY,
        }
    }
}

impl fmt::Display for ImportOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportOperation::Category => "category",
            ImportOperation::Brand => "brand",
            ImportOperation::Product => "product",
            ImportOperation::Store => "store",
            ImportOperation::Inventory => "inventory",
        };
        write!(f, "{}", name)
    }
}

// ==========================================
// ImportReport
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub operation: ImportOperation,
    pub file_path: PathBuf,
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows dropped with a warning (product import only).
    pub rows_skipped: usize,
    /// Top-level documents written.
    pub documents_written: usize,
    pub elapsed: Duration,
}

// ==========================================
// CatalogImporter Trait
// ==========================================
// Implementor: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    fn options(&self) -> &ImportOptions;

    /// Fold category rows into an L1/L2 tree and bulk insert it.
    async fn import_categories(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// Always fails; brands only come from find-or-create.
    async fn import_brands(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// Fold product rows into products with variants and bulk insert them.
    ///
    /// # Requires
    /// - categories already imported
    async fn import_products(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// Insert the placeholder store. `file_path` is not read.
    async fn import_store(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// Build one inventory for the first store from the product extract.
    ///
    /// # Requires
    /// - a store and products already imported
    async fn import_inventories(&self, file_path: &Path) -> ImportResult<ImportReport>;

    /// Dispatch `operation` under the configured deadline.
    ///
    /// Store writes still in flight at the deadline are rolled back.
    async fn run(&self, operation: ImportOperation, file_path: &Path) -> ImportResult<ImportReport> {
        let timeout_secs = self.options().timeout_secs;
        // a zero deadline has already expired
        if timeout_secs == 0 {
            return Err(ImportError::DeadlineExceeded(timeout_secs));
        }
        let work = async {
            match operation {
                ImportOperation::Category => self.import_categories(file_path).await,
                ImportOperation::Brand => self.import_brands(file_path).await,
                ImportOperation::Product => self.import_products(file_path).await,
                ImportOperation::Store => self.import_store(file_path).await,
                ImportOperation::Inventory => self.import_inventories(file_path).await,
            }
        };

        tokio::time::timeout(self.options().timeout(), work)
            .await
            .map_err(|_| ImportError::DeadlineExceeded(timeout_secs))?
    }
}
