use crate::config::AppConfig;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

pub const MISSING_FIELDS_ERROR: &str = "Business name and location are required";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// Request for business insights
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BusinessDataRequest {
    pub name: String,
    pub location: String,
}

/// Query parameters for headline regeneration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HeadlineParams {
    pub name: String,
    pub location: String,
}

/// Business insights response
#[derive(Debug, Serialize)]
pub struct BusinessDataResponse {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

/// Regenerated headline response
#[derive(Debug, Serialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Static API description served at the root
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl BusinessDataRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        validate_business_fields(&self.name, &self.location)
    }
}

impl HeadlineParams {
    /// Validate the query parameters
    pub fn validate(&self) -> Result<(), String> {
        validate_business_fields(&self.name, &self.location)
    }
}

fn validate_business_fields(name: &str, location: &str) -> Result<(), String> {
    if name.trim().is_empty() || location.trim().is_empty() {
        return Err(MISSING_FIELDS_ERROR.to_string());
    }
    Ok(())
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                // Details stay server-side; the client gets a generic message
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
