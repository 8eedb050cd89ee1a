use crate::api::headline::handlers::regenerate_headline_handler;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/regenerate-headline", get(regenerate_headline_handler))
}
