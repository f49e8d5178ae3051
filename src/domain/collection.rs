//! Id-keyed record collections.
//!
//! Every helper here returns a fresh `Vec` and leaves the input alone. An id
//! that matches nothing is not an error: the result is simply equal to the
//! input, which the store treats as "nothing changed".

use thiserror::Error;

/// Rejected record input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// A record owned by one of the store's collections
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// Generate a fresh opaque record id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Trim `value` and reject it when nothing is left
pub fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}

/// Append a record. A record whose id is already present is ignored so ids stay unique.
pub fn append<T: Record>(items: &[T], record: T) -> Vec<T> {
    let mut next = items.to_vec();
    if !items.iter().any(|item| item.id() == record.id()) {
        next.push(record);
    }
    next
}

/// Drop the record with `id`
pub fn remove<T: Record>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Replace the record with `id` by `f(record)`, keeping its position
pub fn replace<T, F>(items: &[T], id: &str, f: F) -> Vec<T>
where
    T: Record,
    F: Fn(&T) -> T,
{
    items
        .iter()
        .map(|item| if item.id() == id { f(item) } else { item.clone() })
        .collect()
}

/// Find the record with `id`
pub fn find<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
