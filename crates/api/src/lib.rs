//! HTTP API layer for holocron.
//!
//! This crate provides the REST API over users, the character and planet
//! catalogs, and per-user favourites:
//!
//! - **Endpoints**: one router per resource, merged in [`endpoints::router`]
//! - **Extractors**: JSON bodies and path ids mapped onto [`AppError`](holocron_common::AppError)
//! - **Middleware**: application state, request tracing, trailing-slash normalization
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

use axum::Router;
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

pub use endpoints::router;
pub use middleware::AppState;

/// Build the fully layered application service.
///
/// Trailing slashes are trimmed before routing, so `/users/` and `/users`
/// reach the same handler.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
