//! Kasir API Server
//!
//! Point-of-sale backend exposing CRUD endpoints for products and
//! categories over HTTP/JSON.
//!
//! The storage backend is picked at startup: a process-local store (the
//! default) or SQLite (embedded). Handlers only see the store traits.

mod error;
mod extractors;
mod handlers;
mod router;
mod settings;
mod storage;

use anyhow::{Context, Result};
use kasir_core::{Category, CategoryStore, Product, ProductStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::{Backend, Settings};
use storage::memory::{seed_categories, seed_products};
use storage::{Database, MemoryStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub categories: Arc<dyn CategoryStore>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            products,
            categories,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(settings.log_json) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Kasir API Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(settings).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("{}", e))
}

async fn run_server(settings: Settings) -> Result<()> {
    info!(
        "Config loaded: bind={}, backend={:?}",
        settings.bind_address, settings.backend
    );

    let state = build_state(&settings).await?;
    let app = router::build_router(state);

    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn build_state(settings: &Settings) -> Result<AppState> {
    match settings.backend {
        Backend::Memory => {
            let (products, categories) = if settings.seed {
                info!("Seeding in-memory store with sample records");
                (
                    MemoryStore::with_records(seed_products()),
                    MemoryStore::with_records(seed_categories()),
                )
            } else {
                (MemoryStore::<Product>::new(), MemoryStore::<Category>::new())
            };
            Ok(AppState::new(Arc::new(products), Arc::new(categories)))
        }
        Backend::Sqlite => {
            let db = Arc::new(
                Database::new(&settings.database_path)
                    .await
                    .context("Failed to initialize database")?,
            );
            info!("SQLite database initialized at: {}", settings.database_path);
            Ok(AppState::new(db.clone(), db))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
