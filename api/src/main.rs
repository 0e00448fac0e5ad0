//! AI Audit Toolkit API Server
//!
//! Tracks AI-readiness audit engagements: interview guides, opportunity
//! classification, ROI modelling and client deliverables.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod report;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::JsonFileProjectRepository;
use app::AuditService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub audit_service: Arc<AuditService<JsonFileProjectRepository>>,
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

/// Build the service stack for a config
pub async fn build_state(config: Config) -> anyhow::Result<AppState> {
    config
        .policy
        .validate()
        .context("Invalid ROI policy configuration")?;
    anyhow::ensure!(
        config.default_implementation_cost.is_finite() && config.default_implementation_cost >= 0.0,
        "DEFAULT_IMPLEMENTATION_COST must be a non-negative number, got {}",
        config.default_implementation_cost
    );

    let project_repo = Arc::new(
        JsonFileProjectRepository::open(&config.data_dir)
            .await
            .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?,
    );

    let audit_service = Arc::new(
        AuditService::new(project_repo)
            .with_policy(config.policy)
            .with_default_implementation_cost(config.default_implementation_cost)
            .with_report_author(config.report_author.clone()),
    );

    Ok(AppState { audit_service })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Engine
        .route("/classify", post(handlers::classify))
        .route("/roi", post(handlers::calculate_roi))
        // Projects
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/projects/example", post(handlers::create_example_project))
        .route("/projects/import", post(handlers::import_project))
        .route(
            "/projects/:id",
            get(handlers::get_project)
                .patch(handlers::update_project)
                .delete(handlers::delete_project),
        )
        .route(
            "/projects/:id/opportunities",
            post(handlers::add_opportunity),
        )
        .route(
            "/projects/:id/opportunities/:index",
            delete(handlers::remove_opportunity),
        )
        // Analysis and deliverables
        .route("/projects/:id/roi", get(handlers::get_roi))
        .route("/projects/:id/dashboard", get(handlers::get_dashboard))
        .route(
            "/projects/:id/documents/interview-guide",
            get(handlers::get_interview_guide),
        )
        .route(
            "/projects/:id/documents/opportunity-matrix",
            get(handlers::get_opportunity_matrix),
        )
        .route(
            "/projects/:id/documents/executive-report",
            get(handlers::get_executive_report),
        )
        .route("/projects/:id/documents/slides", get(handlers::get_slides))
        .route("/projects/:id/export", get(handlers::export_project))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,audit_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AI Audit Toolkit API...");

    let config = Config::from_env();
    let port = config.port;
    tracing::info!(data_dir = %config.data_dir.display(), "Loading projects");

    let state = build_state(config).await?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
