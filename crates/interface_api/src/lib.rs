//! HTTP API Layer
//!
//! REST API for the mesa back office using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: thin request handlers over the journal service
//! - **Middleware**: request auditing and tracing
//! - **DTOs**: request/response shapes with validation
//! - **Error Handling**: consistent JSON error envelope
//!
//! The application state carries a [`domain_ledger::JournalService`] over
//! an injected ledger store, so the same router runs against PostgreSQL in
//! production and the in-memory store in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_ledger::{AccountRoleMap, JournalService};

use crate::config::ApiConfig;
use crate::handlers::{accounts, health, journal, reports, sales};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Journal service over the configured ledger store
    pub journal: JournalService,
    /// Account role configuration, passed explicitly into every report
    pub roles: AccountRoleMap,
    /// API configuration
    pub config: ApiConfig,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no audit trail needed)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Journal routes
    let journal_routes = Router::new()
        .route("/", get(journal::list_entries))
        .route("/", post(journal::create_entry));

    // Report routes
    let report_routes = Router::new()
        .route("/balance-sheet", get(reports::balance_sheet))
        .route("/cash-flow", get(reports::cash_flow));

    // API routes with audit logging
    let api_routes = Router::new()
        .nest("/journal", journal_routes)
        .route("/sales", post(sales::post_sale))
        .nest("/reports", report_routes)
        .route("/accounts", get(accounts::list_accounts))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
