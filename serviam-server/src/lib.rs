//! # Serviam Server
//!
//! HTTP front end for the Serviam media catalog: seeded browsing, search,
//! incremental card pagination, and info/watch projections, plus the media
//! root and static assets served straight from disk.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
