//! Request validation.
//!
//! Every function returns the full list of problems instead of stopping at
//! the first one, so a single 400 response can describe all of them.

use crate::types::{CreateTodo, FieldError, ModifyTodo};

pub type Validation = Result<(), Vec<FieldError>>;

pub fn validate_create(input: &CreateTodo) -> Validation {
    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push(FieldError::new("title", "title must not be blank"));
    }
    finish(errors)
}

pub fn validate_modify(input: &ModifyTodo) -> Validation {
    let mut errors = Vec::new();
    if input.id.trim().is_empty() {
        errors.push(FieldError::new("id", "id must not be blank"));
    }
    finish(errors)
}

/// Validates an identifier taken from a request path.
pub fn validate_id(id: &str) -> Validation {
    if id.trim().is_empty() {
        return Err(vec![FieldError::new("id", "id must not be blank")]);
    }
    Ok(())
}

fn finish(errors: Vec<FieldError>) -> Validation {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
