//! HTTP boundary for `/api/todos`.
//!
//! # Routes
//! - `GET    /api/todos`       list
//! - `POST   /api/todos`       create `{title}`
//! - `PUT    /api/todos`       update `{id, done}` (PATCH is accepted too)
//! - `DELETE /api/todos/{id}`  delete (`/api/todos/` answers 400)
//!
//! Every success is `200 {todos: [...]}`; failures are `ErrorBody` JSON with
//! the status chosen by [`error::status_for`].

pub mod error;
mod handlers;

use axum::http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service::TodoService;

pub use error::ApiFailure;

pub fn router(service: TodoService) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .put(handlers::update_todo)
                .patch(handlers::update_todo),
        )
        .route("/api/todos/", delete(handlers::delete_without_id))
        .route("/api/todos/{id}", delete(handlers::delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Allows browser calls from a single front-end origin.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE]))
}
