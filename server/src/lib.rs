//! To-do list REST API.
//!
//! # Overview
//! `api` (axum routes) → `service` (use cases, refreshed list) → `store`
//! (memory or SQLite). Wire types and validation live in `todo_core`.

pub mod api;
pub mod config;
pub mod logging;
pub mod service;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;

pub use api::router;
pub use config::Config;
pub use service::{TodoError, TodoService};

/// Router over a fresh in-memory store.
pub fn app() -> Router {
    router(TodoService::in_memory())
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}
