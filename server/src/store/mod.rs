//! Storage accessor for todos.
//!
//! # Invariants
//! - `find_all` returns todos in creation order.
//! - `save` is an upsert; updating a todo keeps its position in that order.
//! - `delete_by_id` reports `StoreError::NotFound` for an unknown id and
//!   leaves the store unchanged.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;
use todo_core::Todo;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo not found: {0}")]
    NotFound(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// CRUD-by-id and full scan over todos.
///
/// Calls are synchronous and short; implementations guard their own state.
pub trait TodoStore: Send + Sync {
    fn save(&self, todo: Todo) -> StoreResult<Todo>;
    fn find_all(&self) -> StoreResult<Vec<Todo>>;
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>>;
    fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
