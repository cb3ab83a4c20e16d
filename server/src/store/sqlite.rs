use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use todo_core::Todo;
use tracing::info;

use super::{StoreError, StoreResult, TodoStore};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    id         TEXT PRIMARY KEY NOT NULL,
    title      TEXT NOT NULL,
    done       INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
)";

const TODO_SELECT_SQL: &str = "SELECT id, title, done, created_at FROM todos";

/// SQLite-backed store over a single `todos` table.
///
/// `rusqlite::Connection` is not `Sync`, so every call takes the mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened sqlite store");
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute(SCHEMA_SQL, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoStore for SqliteStore {
    fn save(&self, todo: Todo) -> StoreResult<Todo> {
        self.conn()?.execute(
            "INSERT INTO todos (id, title, done, created_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET title = excluded.title, done = excluded.done",
            params![todo.id, todo.title, todo.done, todo.created_at],
        )?;
        Ok(todo)
    }

    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{TODO_SELECT_SQL} ORDER BY rowid"))?;
        let todos = stmt
            .query_map([], todo_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let conn = self.conn()?;
        let todo = conn
            .query_row(&format!("{TODO_SELECT_SQL} WHERE id = ?1"), [id], todo_from_row)
            .optional()?;
        Ok(todo)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let affected = self.conn()?.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        done: row.get(2)?,
        created_at: row.get(3)?,
    })
}
