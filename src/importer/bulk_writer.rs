// ==========================================
// Storefront Catalog - Bulk Writer
// ==========================================
// Responsibility: turn validated entities into one ordered bulk insert
// Rule: an empty batch is an error, the store is never called with nothing
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::repository::{to_document, DocumentStore};
use serde::Serialize;
use tracing::info;

pub struct BulkWriter<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> BulkWriter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Insert `entities` into `collection` in order; returns the count written.
    pub async fn write_all<T: Serialize>(
        &self,
        collection: &'static str,
        entities: &[T],
    ) -> ImportResult<usize> {
        if entities.is_empty() {
            return Err(ImportError::NothingToImport { collection });
        }

        let operation = format!("BulkWrite {}", collection);
        let documents = entities
            .iter()
            .map(to_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ImportError::store(operation.clone()))?;

        let ids = self
            .store
            .bulk_insert(collection, documents)
            .await
            .map_err(ImportError::store(operation))?;

        info!(collection = %collection, count = ids.len(), "bulk write committed");
        Ok(ids.len())
    }
}
