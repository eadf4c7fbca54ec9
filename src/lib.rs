pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod listing;
pub mod models;
pub mod projections;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::Catalog, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(routes::movies))
        .route("/movies/", get(routes::movies))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
