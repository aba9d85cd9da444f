// ==========================================
// Storefront Catalog - Reference Resolver
// ==========================================
// Responsibility: fetch previously imported reference data
// Rule: any store failure other than not-found is fatal
// ==========================================

use crate::domain::{Category, NamedReference, Product, Store};
use crate::importer::error::{ImportError, ImportResult};
use crate::repository::{collections, find_all_as, find_one_as, DocumentStore, Filter};
use serde_json::json;
use tracing::info;

pub struct ReferenceResolver<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> ReferenceResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Find the document named `name`, inserting `{name}` when absent.
    pub async fn find_or_create_one(
        &self,
        collection: &str,
        name: &str,
    ) -> ImportResult<NamedReference> {
        let filter = Filter::eq("name", name);
        match find_one_as::<NamedReference, _>(self.store, collection, &filter).await {
            Ok(found) => Ok(found),
            Err(e) if e.is_not_found() => {
                let id = self
                    .store
                    .insert_one(collection, json!({ "name": name }))
                    .await
                    .map_err(ImportError::store(format!("InsertOne {}", collection)))?;
                info!(collection = %collection, name = %name, id = %id, "seeded reference document");
                Ok(NamedReference {
                    id,
                    name: name.to_string(),
                })
            }
            Err(e) => Err(ImportError::store(format!("FindOne {}", collection))(e)),
        }
    }

    /// All persisted categories; at least one is required.
    pub async fn categories(&self) -> ImportResult<Vec<Category>> {
        let categories: Vec<Category> =
            find_all_as(self.store, collections::CATEGORY, &Filter::all())
                .await
                .map_err(ImportError::store("Find categories"))?;
        if categories.is_empty() {
            return Err(ImportError::MissingReferenceData("categories"));
        }
        Ok(categories)
    }

    /// All persisted stores (possibly none).
    pub async fn stores(&self) -> ImportResult<Vec<Store>> {
        find_all_as(self.store, collections::STORE, &Filter::all())
            .await
            .map_err(ImportError::store("Find stores"))
    }

    /// All persisted products; at least one is required.
    pub async fn products(&self) -> ImportResult<Vec<Product>> {
        let products: Vec<Product> = find_all_as(self.store, collections::PRODUCT, &Filter::all())
            .await
            .map_err(ImportError::store("Find products"))?;
        if products.is_empty() {
            return Err(ImportError::MissingReferenceData("products"));
        }
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SqliteDocumentStore;

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = SqliteDocumentStore::new(":memory:", "catalog").unwrap();
        let resolver = ReferenceResolver::new(&store);

        let first = resolver.find_or_create_one(collections::BRAND, "Dropezy").await.unwrap();
        let second = resolver.find_or_create_one(collections::BRAND, "Dropezy").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Dropezy");
        let all = store.find_many(collections::BRAND, &Filter::all()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_categories_and_products() {
        let store = SqliteDocumentStore::new(":memory:", "catalog").unwrap();
        let resolver = ReferenceResolver::new(&store);

        assert!(matches!(
            resolver.categories().await,
            Err(ImportError::MissingReferenceData("categories"))
        ));
        assert!(matches!(
            resolver.products().await,
            Err(ImportError::MissingReferenceData("products"))
        ));
        assert!(resolver.stores().await.unwrap().is_empty());
    }
}
