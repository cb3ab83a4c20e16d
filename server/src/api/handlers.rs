use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::Json;
use todo_core::{CreateTodo, ModifyTodo, TodoList};
use tracing::{error, info, warn};

use super::error::ApiFailure;
use crate::service::{TodoError, TodoService};

type ApiResult = Result<Json<TodoList>, ApiFailure>;

pub async fn list_todos(State(service): State<TodoService>) -> ApiResult {
    info!("/api/todos GET request");
    service
        .retrieve()
        .map(Json)
        .map_err(|err| failure("list", err))
}

pub async fn create_todo(
    State(service): State<TodoService>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult {
    let Json(input) = payload?;
    service
        .create(input)
        .map(Json)
        .map_err(|err| failure("create", err))
}

pub async fn update_todo(
    State(service): State<TodoService>,
    method: Method,
    payload: Result<Json<ModifyTodo>, JsonRejection>,
) -> ApiResult {
    let Json(input) = payload?;
    info!(%method, id = %input.id, done = input.done, "/api/todos update request");
    service
        .update(input)
        .map(Json)
        .map_err(|err| failure("update", err))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> ApiResult {
    info!(id = %id, "/api/todos DELETE request");
    service
        .delete(&id)
        .map(Json)
        .map_err(|err| failure("delete", err))
}

/// `DELETE /api/todos/` with the id segment left empty.
pub async fn delete_without_id(State(service): State<TodoService>) -> ApiResult {
    info!("/api/todos/ DELETE request without id");
    service
        .delete("")
        .map(Json)
        .map_err(|err| failure("delete", err))
}

/// Logs the failure at a level matching who is at fault, then renders it.
fn failure(operation: &'static str, err: TodoError) -> ApiFailure {
    match &err {
        TodoError::Validation(fields) => warn!(operation, ?fields, "validation failed"),
        other => error!(operation, error = %other, "todo operation failed"),
    }
    ApiFailure::from(err)
}
