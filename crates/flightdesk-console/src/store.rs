//! Resource stores backing the console commands.
//!
//! [`ResourceStore`] is the data contract every command talks to: two-stage
//! id resolution (`parse_id`, then `get`), paged listing through the query
//! engine, and JSON-driven create and update. [`MemoryStore`] keeps a
//! collection in memory for the life of the process; its insertion order is
//! the collection order the engine filters and pages.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use flightdesk_query::{paginate, Page, QueryState};

use crate::entities::Resource;
use crate::error::{ConsoleError, Result};
use crate::session::Scope;

/// Storage contract for one resource type.
///
/// Ids are plain strings. Create and update take JSON so the CLI can pass
/// `--data` through unchanged.
pub trait ResourceStore: Send + Sync {
    /// The record type.
    type Item: Resource;

    /// Validates an id string before lookup.
    ///
    /// Ids must be non-empty and contain no whitespace; surrounding
    /// whitespace is trimmed.
    fn parse_id(&self, id_str: &str) -> Result<String> {
        let id = id_str.trim();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ConsoleError::InvalidId(id_str.to_string()));
        }
        Ok(id.to_string())
    }

    /// Retrieves an item by id, returning `None` if absent.
    fn get(&self, id: &str) -> Result<Option<Self::Item>>;

    /// The error reported for a missing id.
    fn not_found_error(id: &str) -> ConsoleError
    where
        Self: Sized,
    {
        ConsoleError::NotFound {
            resource: <Self::Item as Resource>::KIND.singular(),
            id: id.to_string(),
        }
    }

    /// Retrieves an item by id, failing with `NotFound` if absent.
    fn resolve(&self, id: &str) -> Result<Self::Item>
    where
        Self: Sized,
    {
        let id = self.parse_id(id)?;
        self.get(&id)?.ok_or_else(|| Self::not_found_error(&id))
    }

    /// Runs `state` against the collection, restricted by `scope`.
    fn list(&self, state: &QueryState, scope: Option<&Scope>) -> Result<Page<Self::Item>>;

    /// Inserts a new item described by `data`.
    fn create(&self, data: serde_json::Value) -> Result<Self::Item>;

    /// Merges the top-level keys of `data` into the item. The id can't change.
    fn update(&self, id: &str, data: serde_json::Value) -> Result<Self::Item>;

    /// Flips the item's status flag.
    fn toggle(&self, id: &str) -> Result<Self::Item>;

    /// Removes an item.
    fn delete(&self, id: &str) -> Result<()>;

    /// Number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store guarded by a lock.
#[derive(Debug)]
pub struct MemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Resource> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Resource> MemoryStore<T> {
    /// Creates a store seeded with `items`, in order.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Copies the whole collection.
    pub fn snapshot(&self) -> Vec<T> {
        self.read().clone()
    }

    /// Returns the first item matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.read().iter().find(|item| predicate(item)).cloned()
    }

    /// Counts items matching `predicate`.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.read().iter().filter(|item| predicate(item)).count()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn decode(data: serde_json::Value) -> Result<T> {
        serde_json::from_value(data).map_err(|source| ConsoleError::InvalidData {
            resource: T::KIND.singular(),
            source,
        })
    }
}

impl<T: Resource> ResourceStore for MemoryStore<T> {
    type Item = T;

    fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.find(|item| item.id() == id))
    }

    fn list(&self, state: &QueryState, scope: Option<&Scope>) -> Result<Page<T>> {
        let items = self.read();
        let mut predicates = T::predicates();
        let mut state = state.clone();

        if let Some(scope) = scope {
            let requested = state
                .filters
                .get(scope.field)
                .filter(|value| {
                    predicates
                        .rule_for(scope.field)
                        .is_some_and(|rule| rule.is_active(value))
                })
                .map(|value| value.trim().to_string());
            if requested.is_some_and(|value| value != scope.value) {
                tracing::debug!(kind = %T::KIND, scope = %scope, "filter conflicts with scope");
                return Ok(paginate(Vec::new(), state.page, state.page_size));
            }
            predicates = predicates.exact(scope.field);
            state.filters.insert(scope.field.to_string(), scope.value.clone());
        }

        let page = predicates.run(&items[..], &state, T::accessor).cloned();
        tracing::debug!(
            kind = %T::KIND,
            total = page.total_items,
            page = page.current_page,
            pages = page.total_pages,
            "list"
        );
        Ok(page)
    }

    fn create(&self, data: serde_json::Value) -> Result<T> {
        let item = Self::decode(data)?;
        let id = self.parse_id(item.id())?;
        if id != item.id() {
            return Err(ConsoleError::InvalidId(item.id().to_string()));
        }

        let mut items = self.write();
        if items.iter().any(|existing| existing.id() == id) {
            return Err(ConsoleError::Conflict {
                resource: T::KIND.singular(),
                id,
            });
        }
        items.push(item.clone());
        tracing::debug!(kind = %T::KIND, id = %id, "created");
        Ok(item)
    }

    fn update(&self, id: &str, data: serde_json::Value) -> Result<T> {
        let id = self.parse_id(id)?;
        let serde_json::Value::Object(patch) = data else {
            return Err(ConsoleError::InvalidArgument(
                "update data must be a JSON object".to_string(),
            ));
        };

        let mut items = self.write();
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found_error(&id))?;

        let serde_json::Value::Object(mut merged) = serde_json::to_value(&*slot)? else {
            return Err(ConsoleError::InvalidArgument(format!(
                "{} '{}' is not a JSON object",
                T::KIND.singular(),
                id
            )));
        };
        for (key, value) in patch {
            if key == "id" {
                if value.as_str() != Some(id.as_str()) {
                    return Err(ConsoleError::ImmutableField(key));
                }
                continue;
            }
            if !merged.contains_key(&key) {
                return Err(ConsoleError::InvalidArgument(format!(
                    "unknown {} field '{}'",
                    T::KIND.singular(),
                    key
                )));
            }
            merged.insert(key, value);
        }

        let updated = Self::decode(serde_json::Value::Object(merged))?;
        *slot = updated.clone();
        tracing::debug!(kind = %T::KIND, id = %id, "updated");
        Ok(updated)
    }

    fn toggle(&self, id: &str) -> Result<T> {
        let id = self.parse_id(id)?;
        let mut items = self.write();
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found_error(&id))?;
        item.toggle();
        tracing::debug!(kind = %T::KIND, id = %id, flag = T::FLAG, on = item.flag(), "toggled");
        Ok(item.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let id = self.parse_id(id)?;
        let mut items = self.write();
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Self::not_found_error(&id))?;
        items.remove(index);
        tracing::debug!(kind = %T::KIND, id = %id, "deleted");
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
