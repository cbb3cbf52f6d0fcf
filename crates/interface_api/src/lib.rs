//! HTTP API Layer
//!
//! This crate provides the REST API for the wallet using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per area (planning, agenda, entries, reports)
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Every mutating request runs one load-modify-save cycle on the wallet
//! document while holding the state's write lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(store, clock, config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Clock;
use domain_wallet::AppData;
use infra_store::DocumentStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{agenda, document, entries, health, planning, reports};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub clock: Arc<dyn Clock>,
    pub config: ApiConfig,
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, config: ApiConfig) -> Self {
        Self {
            store,
            clock,
            config,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Today in the configured time zone
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Loads the current document
    pub async fn document(&self) -> Result<AppData, ApiError> {
        Ok(self.store.load().await?)
    }

    /// Applies `change` to a fresh copy of the document and saves it
    ///
    /// Nothing is saved when `change` fails. Concurrent updates queue on the
    /// write lock so none is lost.
    pub async fn update<T, F>(&self, change: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut AppData) -> Result<T, ApiError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        let outcome = change(&mut doc)?;
        self.store.save(&doc).await?;
        Ok(outcome)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Store, clock and configuration shared by all handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Planned expense routes
    let planning_routes = Router::new()
        .route("/", get(planning::list_planned_expenses).post(planning::create_planned_expense))
        .route("/:id", put(planning::update_planned_expense).delete(planning::delete_planned_expense))
        .route("/:id/periods", get(planning::list_periods))
        .route("/:id/payments", post(planning::record_payment))
        .route("/:id/payments/:payment_id", axum::routing::delete(planning::delete_payment));

    let api_routes = Router::new()
        .route("/document", get(document::get_document).put(document::replace_document))
        .nest("/planned-expenses", planning_routes)
        .route("/dashboard/upcoming", get(agenda::upcoming))
        .route("/calendar/:period", get(agenda::calendar))
        .route("/incomes", post(entries::create_income))
        .route("/expenses", post(entries::create_expense))
        .route("/reports/monthly/:period", get(reports::monthly_report))
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
