//! Wire types for the todo API.
//!
//! # Design
//! The server and every client decode the same structs, so schema drift
//! between the two sides is a compile error rather than a runtime surprise.
//! Field names are camelCase on the wire (`createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// A fresh, not-yet-done todo with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// Request payload for creating a todo.
///
/// A missing `title` decodes as an empty string so that validation, not the
/// JSON decoder, reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Request payload for marking a todo done or not done.
///
/// Only `done` is applied. Unknown fields such as `title` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifyTodo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub done: bool,
}

/// The refreshed list returned by every endpoint on success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// One validation problem, tied to the offending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Body of every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorBody {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }
}
