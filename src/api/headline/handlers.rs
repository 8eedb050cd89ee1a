use crate::api::models::*;
use crate::api::simulate_delay;
use crate::generator;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

pub async fn regenerate_headline_handler(
    State(state): State<AppState>,
    Query(params): Query<HeadlineParams>,
) -> Result<Json<HeadlineResponse>, AppError> {
    // Validate
    params.validate().map_err(AppError::BadRequest)?;

    info!(name = %params.name, location = %params.location, "Regenerating headline");

    // Shorter delay than the full insights endpoint
    let delay = &state.config.delay;
    if delay.enabled {
        simulate_delay(delay.headline_min_ms, delay.headline_max_ms).await;
    }

    let headline = generator::generate_headline(&params.name, &params.location);

    Ok(Json(HeadlineResponse { headline }))
}
