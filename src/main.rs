// ==========================================
// Storefront Catalog - Importer CLI
// ==========================================
// Usage:
//   catalog-importer --operation product --path products.csv \
//       --store sqlite://catalog.db --name storefront
// ==========================================

use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use storefront_catalog::config::{ConfigManager, ImportOptions};
use storefront_catalog::importer::{CatalogImporter, CatalogImporterImpl, ImportOperation};
use storefront_catalog::repository::SqliteDocumentStore;
use storefront_catalog::{logging, VERSION};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "catalog-importer")]
#[command(about = "Bulk import catalog extracts into the document store")]
#[command(version)]
struct Cli {
    /// Bulk insert operation type
    #[arg(long, value_enum)]
    operation: Option<ImportOperation>,

    /// Path of the extract to import
    #[arg(long)]
    path: Option<PathBuf>,

    /// Document store connection string (sqlite://<file> or a bare path)
    #[arg(long, alias = "mongo")]
    store: Option<String>,

    /// Database name inside the store
    #[arg(long)]
    name: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn required<T>(value: Option<T>, message: &'static str) -> anyhow::Result<T> {
    value.ok_or_else(|| anyhow!(message))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let path = required(
        cli.path.filter(|p| !p.as_os_str().is_empty()),
        "path flag cannot be empty",
    )?;
    let store_url = required(
        cli.store.filter(|s| !s.trim().is_empty()),
        "store flag cannot be empty",
    )?;
    let database_name = required(
        cli.name.filter(|s| !s.trim().is_empty()),
        "database name flag cannot be empty",
    )?;
    let operation = required(
        cli.operation,
        "invalid operation flag\nvalid flags: category, brand, product, store, inventory",
    )?;

    let store = SqliteDocumentStore::new(&store_url, &database_name)
        .with_context(|| format!("failed to open document store {}", store_url))?;
    let store = Arc::new(store);

    let config = ConfigManager::from_connection(store.connection())
        .map_err(|e| anyhow!("failed to open config: {}", e))?
        .with_scope(database_name.as_str());
    let options = ImportOptions::load(&config)
        .await
        .map_err(|e| anyhow!("failed to load import config: {}", e))?;

    let importer = CatalogImporterImpl::new(store, options);
    let report = importer
        .run(operation, &path)
        .await
        .with_context(|| format!("failed to import {}", operation))?;

    info!(
        operation = %report.operation,
        documents_written = report.documents_written,
        "done"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }
    info!(version = VERSION, "catalog-importer starting");

    let result = run(cli).await;
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
