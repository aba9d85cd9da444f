// ==========================================
// Storefront Catalog - Document Store Trait
// ==========================================
// Responsibility: collection-level CRUD over JSON documents
// Rule: no catalog rules here, only storage
// ==========================================

use crate::domain::DocumentId;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

// ==========================================
// Filter
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every document in the collection.
    All,
    /// Top-level field equals value.
    Eq { field: String, value: Value },
}

impl Filter {
    pub fn all() -> Self {
        Filter::All
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "{{}}"),
            Filter::Eq { field, value } => write!(f, "{{{}: {}}}", field, value),
        }
    }
}

// ==========================================
// DocumentStore Trait
// ==========================================
// Implementor: SqliteDocumentStore
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents matching `filter`, in insertion order.
    async fn find_many(&self, collection: &str, filter: &Filter) -> RepositoryResult<Vec<Value>>;

    /// First matching document.
    ///
    /// # Errors
    /// - `RepositoryError::NotFound` when nothing matches
    async fn find_one(&self, collection: &str, filter: &Filter) -> RepositoryResult<Value>;

    /// Insert one document. `_id` is generated when absent.
    async fn insert_one(&self, collection: &str, document: Value) -> RepositoryResult<DocumentId>;

    /// Insert all documents atomically (all or nothing), preserving order.
    async fn bulk_insert(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> RepositoryResult<Vec<DocumentId>>;
}

// ==========================================
// Typed helpers
// ==========================================

/// Serialize an entity into a storable document.
pub fn to_document<T: Serialize>(entity: &T) -> RepositoryResult<Value> {
    let value = serde_json::to_value(entity)?;
    if !value.is_object() {
        return Err(RepositoryError::InvalidDocument(
            "document must be a JSON object".to_string(),
        ));
    }
    Ok(value)
}

pub async fn find_all_as<T, S>(store: &S, collection: &str, filter: &Filter) -> RepositoryResult<Vec<T>>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    store
        .find_many(collection, filter)
        .await?
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(RepositoryError::from))
        .collect()
}

pub async fn find_one_as<T, S>(store: &S, collection: &str, filter: &Filter) -> RepositoryResult<T>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let doc = store.find_one(collection, filter).await?;
    Ok(serde_json::from_value(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::all().to_string(), "{}");
        assert_eq!(Filter::eq("name", "UOM").to_string(), "{name: \"UOM\"}");
    }

    #[test]
    fn test_to_document_requires_object() {
        assert!(to_document(&json!({"name": "x"})).is_ok());
        assert!(matches!(
            to_document(&"scalar"),
            Err(RepositoryError::InvalidDocument(_))
        ));
    }
}
