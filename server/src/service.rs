//! Todo use cases.
//!
//! Each operation makes one store call and then re-reads the whole list, so
//! the caller always renders the current state.

use std::sync::Arc;

use thiserror::Error;
use todo_core::{
    validate_create, validate_id, validate_modify, CreateTodo, FieldError, ModifyTodo, Todo,
    TodoList,
};
use tracing::info;

use crate::store::{MemoryStore, StoreError, TodoStore};

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("todo {id} does not exist")]
    NotFound { id: String },

    #[error("deletion failed: id {id} not found")]
    DeleteFailed { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn retrieve(&self) -> TodoResult<TodoList> {
        let todos = self.store.find_all()?;
        Ok(TodoList { todos })
    }

    pub fn create(&self, input: CreateTodo) -> TodoResult<TodoList> {
        validate_create(&input).map_err(TodoError::Validation)?;

        let saved = self.store.save(Todo::new(input.title))?;
        info!(id = %saved.id, title = %saved.title, "todo saved");

        self.retrieve()
    }

    pub fn delete(&self, id: &str) -> TodoResult<TodoList> {
        validate_id(id).map_err(TodoError::Validation)?;

        match self.store.delete_by_id(id) {
            Ok(()) => {}
            Err(StoreError::NotFound(_)) => {
                return Err(TodoError::DeleteFailed { id: id.to_string() });
            }
            Err(err) => return Err(err.into()),
        }

        self.retrieve()
    }

    /// Applies `done` to an existing todo. The title is never modified.
    pub fn update(&self, input: ModifyTodo) -> TodoResult<TodoList> {
        validate_modify(&input).map_err(TodoError::Validation)?;

        let mut todo = self
            .store
            .find_by_id(&input.id)?
            .ok_or_else(|| TodoError::NotFound {
                id: input.id.clone(),
            })?;
        todo.done = input.done;
        self.store.save(todo)?;

        self.retrieve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(service: &TodoService, title: &str) -> TodoList {
        service
            .create(CreateTodo {
                title: title.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn retrieve_empty_is_ok() {
        let service = TodoService::in_memory();
        assert!(service.retrieve().unwrap().todos.is_empty());
    }

    #[test]
    fn create_returns_refreshed_list() {
        let service = TodoService::in_memory();
        create(&service, "A");
        let list = create(&service, "B");

        let titles: Vec<_> = list.todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert!(list.todos.iter().all(|t| !t.done));
    }

    #[test]
    fn create_blank_title_persists_nothing() {
        let service = TodoService::in_memory();
        let err = service
            .create(CreateTodo {
                title: "  ".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, TodoError::Validation(ref fields) if fields[0].field == "title"));
        assert!(service.retrieve().unwrap().todos.is_empty());
    }

    #[test]
    fn update_sets_done_only() {
        let service = TodoService::in_memory();
        let id = create(&service, "Walk dog").todos[0].id.clone();

        let list = service.update(ModifyTodo { id: id.clone(), done: true }).unwrap();
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.todos[0].title, "Walk dog");
        assert!(list.todos[0].done);

        let list = service.update(ModifyTodo { id, done: false }).unwrap();
        assert!(!list.todos[0].done);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let service = TodoService::in_memory();
        create(&service, "A");

        let err = service
            .update(ModifyTodo {
                id: "missing".to_string(),
                done: true,
            })
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound { ref id } if id == "missing"));
        assert!(!service.retrieve().unwrap().todos[0].done);
    }

    #[test]
    fn delete_unknown_id_fails_and_keeps_list() {
        let service = TodoService::in_memory();
        let before = create(&service, "A");

        let err = service.delete("missing").unwrap_err();
        assert!(matches!(err, TodoError::DeleteFailed { ref id } if id == "missing"));
        assert_eq!(service.retrieve().unwrap(), before);
    }

    #[test]
    fn delete_blank_id_is_validation_error() {
        let service = TodoService::in_memory();
        assert!(matches!(service.delete(" "), Err(TodoError::Validation(_))));
    }

    #[test]
    fn create_two_delete_first_leaves_second() {
        let service = TodoService::in_memory();
        let a = create(&service, "A").todos[0].id.clone();
        create(&service, "B");

        let list = service.delete(&a).unwrap();
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.todos[0].title, "B");
    }
}
