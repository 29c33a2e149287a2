//! Application startup and lifecycle management.

use crate::config::CommissionServiceConfig;
use crate::error::AppError;
use crate::handlers::{commissions, contracts, health};
use crate::middleware::{metrics_middleware, request_id_middleware};
use crate::services::init_metrics;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CommissionServiceConfig,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration. Binds the
    /// listener immediately; port 0 picks an ephemeral port (used by the
    /// integration tests).
    pub async fn build(config: CommissionServiceConfig) -> Result<Self, AppError> {
        init_metrics();

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Commission service listener bound");

        Ok(Self {
            port,
            listener,
            state: AppState { config },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!(
            service = "commission-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await
    }
}

/// Build the full HTTP router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/commissions/calculate", post(commissions::calculate))
        .route("/commissions/simulate", post(commissions::simulate))
        .route("/commissions/estimate", post(commissions::estimate))
        .route("/commissions/compare", post(commissions::compare))
        .route("/commissions/break-even", post(commissions::break_even))
        .route("/commissions/stats", post(commissions::stats))
        .route("/contracts", get(contracts::list_contracts))
        .route("/contracts/:contract_type", get(contracts::get_contract));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_handler))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
