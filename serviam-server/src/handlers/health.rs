use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::infra::app_state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "films": catalog.films().len(),
        "collections": catalog.collections().len(),
        "shows": catalog.shows().len(),
        "seasons": catalog.seasons().len(),
        "orderings": state.permutations().len(),
    }))
}
