use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, infra::app_state::AppState};

/// Route paths, shared by the router, redirects and tests.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const RESULTS: &str = "/results";
    pub const CARDS: &str = "/cards";
    pub const INFO: &str = "/info";
    pub const WATCH: &str = "/watch";
    pub const HEALTH: &str = "/health";
    pub const MEDIA: &str = "/media";
    pub const FILES: &str = "/files";
}

/// Build the full router: catalog endpoints plus the media root and static
/// files served from disk.
pub fn create_app(state: AppState) -> Router {
    let media = ServeDir::new(&state.config().media.root);
    let files = ServeDir::new(&state.config().media.files_dir);

    Router::new()
        .route(paths::ROOT, get(handlers::root))
        .route(paths::RESULTS, get(handlers::results))
        .route(paths::CARDS, get(handlers::cards))
        .route(paths::INFO, get(handlers::info))
        .route(paths::WATCH, get(handlers::watch))
        .route(paths::HEALTH, get(handlers::health))
        .nest_service(paths::MEDIA, media)
        .nest_service(paths::FILES, files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
