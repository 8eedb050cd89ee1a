use crate::api::insights::handlers::business_data_handler;
use crate::api::models::AppState;
use axum::{routing::post, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/business-data", post(business_data_handler))
}
