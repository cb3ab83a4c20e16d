//! Shared types and a synchronous client core for the todo API.
//!
//! # Overview
//! - `types`: the JSON payloads exchanged with the server.
//! - `validate`: explicit request validation returning every field error.
//! - `client`: builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod validate;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, ErrorBody, FieldError, ModifyTodo, Todo, TodoList};
pub use validate::{validate_create, validate_id, validate_modify, Validation};
