use std::sync::RwLock;

use todo_core::Todo;

use super::{StoreError, StoreResult, TodoStore};

/// In-process store. A `Vec` keeps insertion order without a sort on read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    fn save(&self, todo: Todo) -> StoreResult<Todo> {
        let mut todos = self.todos.write().map_err(|_| StoreError::Poisoned)?;
        match todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(existing) => *existing = todo.clone(),
            None => todos.push(todo.clone()),
        }
        Ok(todo)
    }

    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let todos = self.todos.read().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.iter().find(|todo| todo.id == id).cloned())
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut todos = self.todos.write().map_err(|_| StoreError::Poisoned)?;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todos.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        for title in ["a", "b", "c"] {
            store.save(Todo::new(title)).unwrap();
        }
        let titles: Vec<_> = store.find_all().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn save_existing_id_updates_in_place() {
        let store = MemoryStore::new();
        let first = store.save(Todo::new("first")).unwrap();
        store.save(Todo::new("second")).unwrap();

        let mut changed = first.clone();
        changed.done = true;
        store.save(changed).unwrap();

        let todos = store.find_all().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, first.id);
        assert!(todos[0].done);
    }

    #[test]
    fn find_by_id_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.find_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let kept = store.save(Todo::new("kept")).unwrap();

        let err = store.delete_by_id("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "nope"));
        assert_eq!(store.find_all().unwrap(), vec![kept]);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let a = store.save(Todo::new("a")).unwrap();
        let b = store.save(Todo::new("b")).unwrap();

        store.delete_by_id(&a.id).unwrap();
        assert_eq!(store.find_all().unwrap(), vec![b]);
    }
}
