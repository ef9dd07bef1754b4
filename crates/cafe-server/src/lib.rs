//! Cafe Catalog Server
//!
//! A small web application exposing the cafe catalog through server-rendered
//! pages and a JSON REST API, backed by an embedded SQLite database.
//!
//! The router is assembled here rather than in `main.rs` so integration
//! tests can drive the full HTTP surface in-process.

pub mod error;
pub mod handlers;
pub mod storage;
pub mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use storage::Database;

/// Fallback delete key, only used when `API_KEY` is unset.
const DEFAULT_API_KEY: &str = "TopSecretAPIKey";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = Arc::new(
            Database::new(&config.database_path)
                .await
                .context("Failed to initialize database")?,
        );

        Ok(Self {
            db,
            api_key: Arc::from(config.api_key.as_str()),
        })
    }
}

/// Server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub database_path: String,
    pub api_key: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `DATA_DIR` defaults to `./data`, `DATABASE_PATH` to a `cafes.db`
    /// inside it, `BIND_ADDRESS` to `0.0.0.0:8000`. `API_KEY` falls back to
    /// a well-known value with a warning; set it in any real deployment.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            let path = data_dir.join("cafes.db");
            path.to_string_lossy().to_string()
        });

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let api_key = std::env::var("API_KEY").unwrap_or_else(|_| {
            warn!("API_KEY not set, using default (insecure for production)");
            DEFAULT_API_KEY.to_string()
        });

        Ok(Self {
            bind_address,
            database_path,
            api_key,
        })
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    info!("Building HTTP router...");

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Server-rendered pages
        .route("/", get(handlers::pages::home))
        .route("/api-docs", get(handlers::pages::api_docs))
        .route("/cafes", get(handlers::pages::cafes))
        .route(
            "/add",
            get(handlers::pages::add_form).post(handlers::pages::add_submit),
        )
        .route(
            "/search",
            get(handlers::pages::search_form).post(handlers::pages::search_submit),
        )
        // JSON API routes
        .route("/api/all", get(handlers::cafes::all))
        .route("/api/add", post(handlers::cafes::add))
        .route("/api/search", get(handlers::cafes::search))
        .route("/api/update-price/:id", patch(handlers::cafes::update_price))
        .route(
            "/api/report-closed/:id",
            delete(handlers::cafes::report_closed),
        )
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
