//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest`; since every endpoint
//! answers with the refreshed list, one `parse_todo_list` consumes any of
//! the responses.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, ModifyTodo, Todo, TodoList};

const TODOS_PATH: &str = "/api/todos";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.todos_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, input)
    }

    pub fn build_update_todo(&self, input: &ModifyTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, input)
    }

    /// Same as `build_update_todo` but sent as PATCH; the server treats both alike.
    pub fn build_patch_todo(&self, input: &ModifyTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{}", self.todos_url(), encode_path_segment(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parses the response of any endpoint into the refreshed list.
    pub fn parse_todo_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        match response.status {
            200 => serde_json::from_str::<TodoList>(&response.body)
                .map(|list| list.todos)
                .map_err(|e| ApiError::Deserialization(e.to_string())),
            400 => {
                let body = error_body(&response);
                Err(ApiError::Rejected {
                    message: body.error,
                    fields: body.fields,
                })
            }
            status => Err(ApiError::Server {
                status,
                message: error_body(&response).error,
            }),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn json_request<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.todos_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Falls back to the raw body when the server did not send an `ErrorBody`.
fn error_body(response: &HttpResponse) -> ErrorBody {
    serde_json::from_str(&response.body).unwrap_or_else(|_| ErrorBody::message(response.body.clone()))
}

fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
