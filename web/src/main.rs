//! Entry point for the photo quiz server.

#[macro_use]
extern crate rocket;

use clap::Parser;
use photoquiz_common::db_util::PgPhotoStore;
use photoquiz_common::store::{MemoryPhotoStore, PhotoStore};
use photoquiz_web::config::Cli;
use photoquiz_web::{AppState, build_rocket};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[launch]
fn rocket() -> _ {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let store: Arc<dyn PhotoStore> = if cli.memory_store {
        tracing::warn!("Using in-memory photo store, uploads will be lost on exit");
        Arc::new(MemoryPhotoStore::new())
    } else {
        match PgPhotoStore::connect(cli.database_url.as_deref()) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to the photo database");
                std::process::exit(1);
            }
        }
    };

    tracing::info!(memory_store = cli.memory_store, "Starting photo quiz server");
    build_rocket(cli.figment(), AppState::new(store, cli.passwords()))
}
