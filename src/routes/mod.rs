//! HTTP route handlers for the status API.
//!
//! Routes are organized by payload kind, with per-route Cache-Control
//! headers. The welcome and service-info payloads are constant per build and
//! may be cached briefly; the health payload is always served fresh.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod info;
pub mod welcome;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_STATIC_PAYLOAD};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes, cache headers, and CORS.
pub fn create_router(state: AppState) -> Router {
    // Welcome and service info - constant payloads, short public cache
    let static_payload_routes = Router::new()
        .route("/", get(welcome::welcome))
        .route("/api/info", get(info::info))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC_PAYLOAD),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    // The API is read-only and unauthenticated; any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .merge(static_payload_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(cors)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
