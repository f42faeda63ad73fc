pub mod transform;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use transform::{list_operations, transform, ApiError};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "coord-transform-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Build the HTTP router exposing the transform operations
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/v1/operations", get(list_operations))
        .route("/api/v1/transform/:operation", post(transform))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
