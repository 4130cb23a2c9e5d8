use axum::{
    extract::{Query, RawQuery, State, rejection::QueryRejection},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use serviam_core::{
    cards::{self, Card},
    query::PermutationKey,
};
use tracing::info;

use crate::{
    infra::{app_state::AppState, errors::AppResult},
    routes::paths,
};

/// Selects a named ordering: a search (`q`) wins over a seed (`s`).
#[derive(Debug, Default, Deserialize)]
pub struct OrderingParams {
    pub q: Option<String>,
    pub s: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub q: Option<String>,
    pub s: Option<String>,
    /// First card, inclusive
    pub f: usize,
    /// Last card, exclusive
    pub l: usize,
}

/// First page of an ordering plus the key to keep paginating it with.
#[derive(Debug, Serialize)]
pub struct ResultsPage {
    pub key: String,
    pub cards: Vec<Card>,
}

/// `None` when neither a non-empty query nor a seed was supplied.
fn ordering_key(
    q: Option<&str>,
    s: Option<&str>,
) -> AppResult<Option<PermutationKey>> {
    if let Some(pattern) = q.filter(|q| !q.is_empty()) {
        return Ok(Some(PermutationKey::query(pattern)));
    }
    match s.filter(|s| !s.is_empty()) {
        Some(seed) => Ok(Some(PermutationKey::parse_seed(seed)?)),
        None => Ok(None),
    }
}

/// `/results` with the incoming parameters kept and `s` set to `seed`.
fn seeded_location(raw_query: Option<&str>, seed: &str) -> String {
    let mut pairs: Vec<&str> = raw_query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some("s"))
        .collect();
    let seed_pair = format!("s={seed}");
    pairs.push(&seed_pair);
    format!("{}?{}", paths::RESULTS, pairs.join("&"))
}

pub async fn root() -> Redirect {
    Redirect::to(paths::RESULTS)
}

/// First page of a search or a seeded shuffle.
///
/// Without either, a fresh seed is minted and the client is redirected to
/// it so reloading the page keeps the same order.
pub async fn results(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    params: Result<Query<OrderingParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;

    let Some(key) = ordering_key(params.q.as_deref(), params.s.as_deref())?
    else {
        let seed = format!("{:x}", rand::random::<u64>());
        info!(seed = %seed, "minted browse seed");
        let location = seeded_location(raw_query.as_deref(), &seed);
        return Ok(Redirect::to(&location).into_response());
    };

    info!(key = %key, "serving results");
    let ordering = state.permutations().get_or_create(&key);
    let cards = cards::page(
        state.catalog(),
        &ordering,
        0,
        state.config().browse.page_size,
    );

    Ok(Json(ResultsPage {
        key: key.to_string(),
        cards,
    })
    .into_response())
}

/// Cards `[f, l)` of an ordering, for incremental fetching.
pub async fn cards(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Vec<Card>>> {
    let Query(params) = params?;
    let key = ordering_key(params.q.as_deref(), params.s.as_deref())?
        .unwrap_or(PermutationKey::Original);

    info!(key = %key, first = params.f, last = params.l, "serving cards");
    let ordering = state.permutations().get_or_create(&key);
    Ok(Json(cards::page(state.catalog(), &ordering, params.f, params.l)))
}
