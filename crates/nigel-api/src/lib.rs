//! # nigel-api — Axum HTTP Service for the Nigel Number
//!
//! Thin adapter between HTTP and [`nigel_core`]. Handlers pull the raw `n`
//! parameter off the query string, hand it to the core, and translate the
//! classified outcome into a status code and JSON body. No computation lives
//! in this crate.
//!
//! ## API Surface
//!
//! | Route                    | Module                      | Purpose                 |
//! |--------------------------|-----------------------------|-------------------------|
//! | `GET /api/nigel-number/` | [`routes::nigel_number`]    | Nigel Number of `n`     |
//! | `GET /openapi.json`      | [`openapi`]                 | Generated OpenAPI spec  |
//! | `GET /health/*`          | this module                 | Liveness / readiness    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → Handler
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the middleware stack so
/// they neither count towards request metrics nor carry CORS headers.
pub fn app(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    let api = Router::new()
        .merge(routes::nigel_number::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::cors::build_cors_layer(&state.config.cors))
        .layer(middleware::tracing_layer::layer())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the service has no dependencies to wait on.
async fn readiness() -> &'static str {
    "ready"
}
