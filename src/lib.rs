pub mod api;
pub mod config;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::services::index_service::IndexService;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<IndexService>,
}

pub fn create_app(state: AppState) -> Router {
    // The whole path space belongs to package names, so the index handler
    // hangs off the fallback instead of fixed routes.
    Router::new()
        .fallback(api::handlers::index::serve)
        .with_state(state)
}
