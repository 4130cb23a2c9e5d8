use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;
use serviam_core::cards::{self, InfoCards, WatchCards};
use tracing::info;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Item selector; `v` is accepted as an alias of `id`.
#[derive(Debug, Default, Deserialize)]
pub struct ItemParams {
    pub id: Option<String>,
    pub v: Option<String>,
}

impl ItemParams {
    fn into_id(self) -> AppResult<String> {
        self.id
            .or(self.v)
            .ok_or_else(|| AppError::bad_request("missing item id"))
    }
}

pub async fn info(
    State(state): State<AppState>,
    params: Result<Query<ItemParams>, QueryRejection>,
) -> AppResult<Json<InfoCards>> {
    let Query(params) = params?;
    let id = params.into_id()?;
    info!(id = %id, "serving info");
    Ok(Json(cards::info_cards(state.catalog(), &id)?))
}

pub async fn watch(
    State(state): State<AppState>,
    params: Result<Query<ItemParams>, QueryRejection>,
) -> AppResult<Json<WatchCards>> {
    let Query(params) = params?;
    let id = params.into_id()?;
    info!(id = %id, "serving watch");
    Ok(Json(cards::watch_cards(state.catalog(), &id)?))
}
