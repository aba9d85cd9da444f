// ==========================================
// Storefront Catalog - Catalog Importer
// ==========================================
// Responsibility: run one import from file to store
// Flow: parse -> header index -> fold rows -> validate -> gate -> write
// Context: store + ImportOptions are passed in, never global
// ==========================================

use crate::config::ImportOptions;
use crate::domain::Store;
use crate::importer::bulk_writer::BulkWriter;
use crate::importer::catalog_importer_trait::{
    CatalogImporter, FileParser, ImportOperation, ImportReport, RawTable,
};
use crate::importer::category_builder::build_category_tree;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::inventory_builder::build_inventory;
use crate::importer::product_builder::build_products;
use crate::importer::reference_resolver::ReferenceResolver;
use crate::repository::{collections, to_document, DocumentStore};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, instrument};

// ==========================================
// CatalogImporterImpl
// ==========================================
pub struct CatalogImporterImpl<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    options: ImportOptions,
    file_parser: Arc<dyn FileParser>,
}

impl<S> CatalogImporterImpl<S>
where
    S: DocumentStore,
{
    /// Importer reading .csv/.xlsx by extension.
    pub fn new(store: Arc<S>, options: ImportOptions) -> Self {
        Self::with_parser(store, options, Arc::new(UniversalFileParser))
    }

    pub fn with_parser(store: Arc<S>, options: ImportOptions, file_parser: Arc<dyn FileParser>) -> Self {
        Self {
            store,
            options,
            file_parser,
        }
    }

    /// Parse on the blocking pool so the run deadline stays observable.
    async fn read_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let parser = Arc::clone(&self.file_parser);
        let path = file_path.to_path_buf();
        let table = task::spawn_blocking(move || parser.parse_table(&path))
            .await
            .map_err(|e| ImportError::InternalError(format!("file read task failed: {}", e)))??;
        debug!(rows = table.rows.len(), columns = table.header.len(), "file parsed");
        Ok(table)
    }

    fn resolver(&self) -> ReferenceResolver<'_, S> {
        ReferenceResolver::new(self.store.as_ref())
    }

    fn finish_report(
        &self,
        operation: ImportOperation,
        file_path: &Path,
        rows_read: usize,
        rows_skipped: usize,
        documents_written: usize,
        started: Instant,
    ) -> ImportReport {
        let report = ImportReport {
            operation,
            file_path: file_path.to_path_buf(),
            rows_read,
            rows_skipped,
            documents_written,
            elapsed: started.elapsed(),
        };
        info!(
            operation = %report.operation,
            rows_read = report.rows_read,
            rows_skipped = report.rows_skipped,
            documents_written = report.documents_written,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "successfully imported {}",
            report.operation.collection()
        );
        report
    }
}

#[async_trait]
impl<S> CatalogImporter for CatalogImporterImpl<S>
where
    S: DocumentStore + 'static,
{
    fn options(&self) -> &ImportOptions {
        &self.options
    }

    #[instrument(skip(self, file_path), fields(path = %file_path.display()))]
    async fn import_categories(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("importing categories");

        let table = self.read_table(file_path).await?;
        let categories = build_category_tree(&table, &self.options.image_extension)?;
        info!(level_1 = categories.len(), "category tree built");

        let written = BulkWriter::new(self.store.as_ref())
            .write_all(collections::CATEGORY, &categories)
            .await?;

        Ok(self.finish_report(
            ImportOperation::Category,
            file_path,
            table.rows.len(),
            0,
            written,
            started,
        ))
    }

    async fn import_brands(&self, _file_path: &Path) -> ImportResult<ImportReport> {
        Err(ImportError::Unimplemented("brand"))
    }

    #[instrument(skip(self, file_path), fields(path = %file_path.display()))]
    async fn import_products(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("importing products");

        let resolver = self.resolver();
        let categories = resolver.categories().await?;
        let brand = resolver
            .find_or_create_one(collections::BRAND, &self.options.brand_name)
            .await?;
        let variant_type = resolver
            .find_or_create_one(collections::VARIANT_TYPE, &self.options.variant_type_name)
            .await?;
        debug!(brand_id = %brand.id, variant_type_id = %variant_type.id, "reference data resolved");

        let table = self.read_table(file_path).await?;
        let output = build_products(&table, &self.options, &categories, brand.id, variant_type.id)?;

        let written = BulkWriter::new(self.store.as_ref())
            .write_all(collections::PRODUCT, &output.products)
            .await?;

        Ok(self.finish_report(
            ImportOperation::Product,
            file_path,
            table.rows.len(),
            output.skipped,
            written,
            started,
        ))
    }

    #[instrument(skip(self, file_path), fields(path = %file_path.display()))]
    async fn import_store(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("importing store");

        if !self.resolver().stores().await?.is_empty() {
            return Err(ImportError::StoreAlreadyExists);
        }

        let store = Store::placeholder();
        let document = to_document(&store).map_err(ImportError::store("InsertOne store"))?;
        self.store
            .insert_one(collections::STORE, document)
            .await
            .map_err(ImportError::store("InsertOne store"))?;

        Ok(self.finish_report(ImportOperation::Store, file_path, 0, 0, 1, started))
    }

    #[instrument(skip(self, file_path), fields(path = %file_path.display()))]
    async fn import_inventories(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let started = Instant::now();
        info!("importing inventories");

        let resolver = self.resolver();
        let stores = resolver.stores().await?;
        let target = stores
            .first()
            .ok_or(ImportError::MissingReferenceData("stores"))?;
        let products = resolver.products().await?;

        let table = self.read_table(file_path).await?;
        let inventory = build_inventory(&table, &self.options, target, &products)?;

        let document =
            to_document(&inventory).map_err(ImportError::store("InsertOne inventory"))?;
        self.store
            .insert_one(collections::INVENTORY, document)
            .await
            .map_err(ImportError::store("InsertOne inventory"))?;

        Ok(self.finish_report(
            ImportOperation::Inventory,
            file_path,
            table.rows.len(),
            0,
            1,
            started,
        ))
    }
}
