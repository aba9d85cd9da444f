// ==========================================
// Storefront Catalog - SQLite Document Store
// ==========================================
// Responsibility: DocumentStore on rusqlite
// Layout: one `document` table, JSON body per row,
//         namespaced by (database_name, collection)
// rusqlite work runs on the blocking pool
// ==========================================

use crate::db::{
    configure_sqlite_connection, init_schema, open_sqlite_connection, read_schema_version,
    sqlite_path_from_connection_string,
};
use crate::domain::DocumentId;
use crate::repository::document_store::{DocumentStore, Filter, ID_FIELD};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, Transaction};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task;
use tracing::{debug, warn};

// ==========================================
// SqliteDocumentStore
// ==========================================
pub struct SqliteDocumentStore {
    conn: Arc<Mutex<Connection>>,
    database_name: String,
}

impl SqliteDocumentStore {
    /// Open (or create) the store behind `connection_string`, scoped to `database_name`.
    pub fn new(connection_string: &str, database_name: &str) -> RepositoryResult<Self> {
        let path = sqlite_path_from_connection_string(connection_string);
        let conn = open_sqlite_connection(path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(format!("{}: {}", path, e)))?;

        Self::from_connection(Arc::new(Mutex::new(conn)), database_name)
    }

    /// Wrap an existing connection. PRAGMAs and schema are (re)applied; both are idempotent.
    pub fn from_connection(
        conn: Arc<Mutex<Connection>>,
        database_name: &str,
    ) -> RepositoryResult<Self> {
        let database_name = database_name.trim();
        if database_name.is_empty() {
            return Err(RepositoryError::DatabaseConnectionError(
                "database name cannot be empty".to_string(),
            ));
        }

        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            init_schema(&guard)?;
            let version = read_schema_version(&guard)?;
            debug!(database = %database_name, schema_version = ?version, "document store ready");
        }

        Ok(Self {
            conn,
            database_name: database_name.to_string(),
        })
    }

    /// Shared connection, e.g. for ConfigManager.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Run `work` on the blocking pool with the locked connection.
    ///
    /// `work` also receives a flag that turns true once the awaiting future
    /// has been dropped (deadline hit); writes check it before committing.
    async fn with_connection<T, F>(&self, work: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection, &str, &AtomicBool) -> RepositoryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let database_name = self.database_name.clone();
        let abandoned = Arc::new(AtomicBool::new(false));
        let mut caller = CallerGuard::new(Arc::clone(&abandoned));

        let result = task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            work(&*guard, &database_name, &abandoned)
        })
        .await
        .map_err(|e| RepositoryError::InternalError(format!("store task failed: {}", e)))?;

        caller.disarm();
        result
    }
}

/// Marks a blocking store call as abandoned when its caller goes away.
struct CallerGuard {
    abandoned: Arc<AtomicBool>,
    armed: bool,
}

impl CallerGuard {
    fn new(abandoned: Arc<AtomicBool>) -> Self {
        Self {
            abandoned,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CallerGuard {
    fn drop(&mut self) {
        if self.armed {
            self.abandoned.store(true, Ordering::SeqCst);
        }
    }
}

fn query_bodies(
    conn: &Connection,
    database_name: &str,
    collection: &str,
    filter: &Filter,
    limit: Option<usize>,
) -> RepositoryResult<Vec<Value>> {
    let (clause, extra) = filter_clause(filter)?;
    let limit_clause = limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();
    let sql = format!(
        "SELECT body FROM document WHERE database_name = ?1 AND collection = ?2{} ORDER BY rowid{}",
        clause, limit_clause
    );

    let mut bind = vec![
        SqlValue::Text(database_name.to_string()),
        SqlValue::Text(collection.to_string()),
    ];
    bind.extend(extra);

    let mut stmt = conn.prepare(&sql)?;
    let bodies = stmt
        .query_map(params_from_iter(bind.iter()), |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    bodies
        .iter()
        .map(|body| serde_json::from_str(body).map_err(RepositoryError::from))
        .collect()
}

fn insert_tx(
    tx: &Transaction,
    database_name: &str,
    collection: &str,
    rows: &[(DocumentId, String)],
) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO document (database_name, collection, id, body, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    let now = Utc::now().to_rfc3339();
    for (id, body) in rows {
        stmt.execute(params![database_name, collection, id.to_string(), body, now])?;
    }
    Ok(())
}

/// Insert `rows` in one transaction; rolled back if the caller gave up.
fn insert_rows(
    conn: &Connection,
    database_name: &str,
    collection: &str,
    rows: &[(DocumentId, String)],
    abandoned: &AtomicBool,
) -> RepositoryResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

    insert_tx(&tx, database_name, collection, rows)?;

    if abandoned.load(Ordering::SeqCst) {
        warn!(collection = %collection, count = rows.len(), "caller gone, rolling back insert");
        return Err(RepositoryError::Abandoned(collection.to_string()));
    }

    tx.commit()
        .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
    Ok(())
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn find_many(&self, collection: &str, filter: &Filter) -> RepositoryResult<Vec<Value>> {
        let collection = collection.to_string();
        let filter = filter.clone();
        self.with_connection(move |conn, database_name, _| {
            query_bodies(conn, database_name, &collection, &filter, None)
        })
        .await
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> RepositoryResult<Value> {
        let owned_collection = collection.to_string();
        let owned_filter = filter.clone();
        self.with_connection(move |conn, database_name, _| {
            query_bodies(conn, database_name, &owned_collection, &owned_filter, Some(1))
        })
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| RepositoryError::NotFound {
            collection: collection.to_string(),
            filter: filter.to_string(),
        })
    }

    async fn insert_one(&self, collection: &str, mut document: Value) -> RepositoryResult<DocumentId> {
        let id = assign_id(&mut document)?;
        let rows = vec![(id, serde_json::to_string(&document)?)];
        let collection = collection.to_string();
        self.with_connection(move |conn, database_name, abandoned| {
            insert_rows(conn, database_name, &collection, &rows, abandoned)
        })
        .await?;
        Ok(id)
    }

    async fn bulk_insert(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> RepositoryResult<Vec<DocumentId>> {
        if documents.is_empty() {
            return Err(RepositoryError::InvalidDocument(
                "bulk insert requires at least one document".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(documents.len());
        for mut document in documents {
            let id = assign_id(&mut document)?;
            rows.push((id, serde_json::to_string(&document)?));
        }
        let ids: Vec<DocumentId> = rows.iter().map(|(id, _)| *id).collect();

        let owned_collection = collection.to_string();
        self.with_connection(move |conn, database_name, abandoned| {
            insert_rows(conn, database_name, &owned_collection, &rows, abandoned)
        })
        .await?;

        debug!(collection = %collection, count = ids.len(), "bulk insert committed");
        Ok(ids)
    }
}

// ==========================================
// helpers
// ==========================================

/// Read `_id` from the document, generating one when absent.
fn assign_id(document: &mut Value) -> RepositoryResult<DocumentId> {
    let obj = document.as_object_mut().ok_or_else(|| {
        RepositoryError::InvalidDocument("document must be a JSON object".to_string())
    })?;

    match obj.get(ID_FIELD) {
        Some(Value::String(raw)) => DocumentId::parse(raw)
            .map_err(|e| RepositoryError::InvalidDocument(format!("invalid _id {}: {}", raw, e))),
        Some(other) => Err(RepositoryError::InvalidDocument(format!(
            "_id must be a string, got {}",
            other
        ))),
        None => {
            let id = DocumentId::generate();
            obj.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
            Ok(id)
        }
    }
}

/// SQL fragment + bind values for a filter. Binds start at ?3.
fn filter_clause(filter: &Filter) -> RepositoryResult<(String, Vec<SqlValue>)> {
    match filter {
        Filter::All => Ok((String::new(), Vec::new())),
        Filter::Eq { field, value } => {
            if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RepositoryError::InvalidFilter(format!(
                    "unsupported field name: {:?}",
                    field
                )));
            }
            let path = SqlValue::Text(format!("$.{}", field));

            let bound = match value {
                Value::Null => {
                    return Ok((" AND json_extract(body, ?3) IS NULL".to_string(), vec![path]));
                }
                Value::String(s) => SqlValue::Text(s.clone()),
                Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
                Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => SqlValue::Integer(i),
                    (None, Some(f)) => SqlValue::Real(f),
                    _ => {
                        return Err(RepositoryError::InvalidFilter(format!(
                            "unsupported number: {}",
                            n
                        )))
                    }
                },
                Value::Array(_) | Value::Object(_) => {
                    return Err(RepositoryError::InvalidFilter(
                        "only scalar equality is supported".to_string(),
                    ));
                }
            };

            Ok((" AND json_extract(body, ?3) = ?4".to_string(), vec![path, bound]))
        }
    }
}
