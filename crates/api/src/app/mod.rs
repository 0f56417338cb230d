//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store selection and service construction
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    router_with_services(services)
}

/// Router assembly over already-constructed services (shared with tests).
pub fn router_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/suppliers", routes::suppliers::router())
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer())
                .layer(Extension(services)),
        )
}

/// Origin served when `CORS_ALLOWED_ORIGIN` is unset.
const DEFAULT_ALLOWED_ORIGIN: &str = "http://example.com";

/// CORS for browser frontends: explicit method list, any header, origin from
/// `CORS_ALLOWED_ORIGIN` (`*` opts into any origin).
fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let origin = std::env::var("CORS_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
    if origin == "*" {
        return layer.allow_origin(Any);
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!(%origin, "invalid CORS_ALLOWED_ORIGIN; falling back to the default origin");
            layer.allow_origin(HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN))
        }
    }
}
