//! Command-line and environment configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::store::{MemoryStore, SqliteStore, StoreResult, TodoStore};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "To-do list REST API")]
pub struct Config {
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file. Todos are kept in memory when omitted.
    #[arg(long, env = "TODO_DATABASE")]
    pub database: Option<PathBuf>,

    /// Origin allowed to call the API from a browser.
    #[arg(long, env = "TODO_ALLOWED_ORIGIN", default_value = "http://localhost:3000")]
    pub allowed_origin: String,

    /// Default tracing filter; `RUST_LOG` takes precedence when set.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn open_store(&self) -> StoreResult<Arc<dyn TodoStore>> {
        match &self.database {
            Some(path) => Ok(Arc::new(SqliteStore::open(path)?)),
            None => Ok(Arc::new(MemoryStore::new())),
        }
    }
}
