use crate::api::models::*;
use crate::api::simulate_delay;
use crate::generator;
use axum::{extract::State, Json};
use tracing::info;

pub async fn business_data_handler(
    State(state): State<AppState>,
    Json(request): Json<BusinessDataRequest>,
) -> Result<Json<BusinessDataResponse>, AppError> {
    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    info!(name = %request.name, location = %request.location, "Generating business insights");

    // Simulated processing delay
    let delay = &state.config.delay;
    if delay.enabled {
        simulate_delay(delay.insights_min_ms, delay.insights_max_ms).await;
    }

    let rating = generator::generate_rating();
    let reviews = generator::generate_review_count();
    let headline = generator::generate_headline(&request.name, &request.location);

    info!(rating, reviews, "Insights generated");

    Ok(Json(BusinessDataResponse {
        rating,
        reviews,
        headline,
    }))
}
