use std::sync::Arc;

use axum::{routing, Router};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod delete;
pub mod logging;
pub mod models;
pub mod request_id;
pub mod requests;
pub mod responses;
pub mod service;
pub mod validation;

use service::UrlDeleter;

pub struct Services {
    pub urls: Box<dyn UrlDeleter>,
}

impl Services {
    pub fn new(urls: impl UrlDeleter + 'static) -> Self {
        Self {
            urls: Box::new(urls),
        }
    }
}

pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/url", routing::delete(delete::delete_url))
        .with_state(services)
        .layer(request_id::propagate_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id::set_layer())
}
