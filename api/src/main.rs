//! Pizzaria API Server
//!
//! Customer ("cliente") records for the pizzeria front end: create, list,
//! delete and a plain email/password login lookup.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header::HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresClienteRepository;
use app::ClienteService;
use config::Config;
use domain::ports::ClienteRepository;

/// Application state shared across all handlers
pub struct AppState<CR = PostgresClienteRepository>
where
    CR: ClienteRepository,
{
    pub cliente_service: Arc<ClienteService<CR>>,
}

impl<CR> Clone for AppState<CR>
where
    CR: ClienteRepository,
{
    fn clone(&self) -> Self {
        Self {
            cliente_service: self.cliente_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// CORS for the cliente listing, restricted to an explicit origin list
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Build the HTTP router
///
/// Only `GET /clientes` carries the CORS layer; the other routes answer
/// same-origin callers only.
fn build_router<CR>(state: AppState<CR>, cors_origins: &[HeaderValue]) -> Router
where
    CR: ClienteRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Clientes
        .route("/clientes", post(handlers::create_cliente::<CR>))
        .route(
            "/clientes",
            get(handlers::list_clientes::<CR>).layer(cors_layer(cors_origins)),
        )
        .route("/clientes/login", post(handlers::login::<CR>))
        .route("/clientes/:id", delete(handlers::delete_cliente::<CR>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pizzaria_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pizzaria API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_create_schema {
        adapters::ensure_schema(&db)
            .await
            .context("Failed to create schema")?;
    }

    // Create adapters
    let cliente_repo = Arc::new(PostgresClienteRepository::new(db));

    // Create application services
    let cliente_service = Arc::new(ClienteService::new(cliente_repo));

    let state = AppState { cliente_service };
    let app = build_router(state, &config.cors_allowed_origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
