pub mod headline;
pub mod insights;
pub mod models;

// Re-exports
pub use models::*;

use axum::{response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble the full application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(insights::routes())
        .merge(headline::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint: no validation, no delay
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK",
        message: "Business Insights API is running",
        timestamp: Utc::now(),
    })
}

/// Static API description document
pub async fn root_handler() -> impl IntoResponse {
    Json(ApiInfoResponse {
        message: "Business Insights Dashboard API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/business-data",
                description: "Get business analytics and SEO headline",
            },
            EndpointInfo {
                method: "GET",
                path: "/regenerate-headline",
                description: "Generate new SEO headline",
            },
            EndpointInfo {
                method: "GET",
                path: "/health",
                description: "Health check",
            },
            EndpointInfo {
                method: "GET",
                path: "/",
                description: "API description",
            },
        ],
    })
}

/// Non-blocking pause for a uniform random duration in [min_ms, max_ms]
pub(crate) async fn simulate_delay(min_ms: u64, max_ms: u64) {
    let ms = if max_ms > min_ms {
        rand::random_range(min_ms..=max_ms)
    } else {
        min_ms
    };
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
