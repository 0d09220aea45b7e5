//! HTTP transport: routing and request logging.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app::ContactService;

pub mod handlers;

/// Build the application router under `/api`.
pub fn router(service: ContactService) -> Router {
    let contacts = Router::new()
        .route("/", post(handlers::create).get(handlers::get))
        .route(
            "/:id",
            get(handlers::get_by_id)
                .put(handlers::update)
                .delete(handlers::delete),
        );

    Router::new()
        .nest("/api/contacts", contacts)
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
