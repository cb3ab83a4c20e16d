//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `TodoClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; the
//! caller executes the round-trip with whatever HTTP stack it already has.
//!
//! Every request the client builds targets the `/api/todos` collection:
//! GET/POST/PUT/PATCH on the collection itself, DELETE on `/api/todos/{id}`.
//! Bodies are JSON (`CreateTodo`, `ModifyTodo`) and every 200 response body
//! is a `TodoList`, so `HttpResponse::body` is always decoded the same way.

/// HTTP method for a request. PUT and PATCH both mark a todo done or not done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL (`base_url` + `/api/todos[/{id}]`). `headers`
/// carries `content-type: application/json` whenever `body` is set.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// `body` is a `TodoList` on 200 and an `ErrorBody` otherwise, except for
/// responses the server did not produce itself (e.g. 405 from routing).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
