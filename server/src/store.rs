//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` is a plain owned value: an insertion-ordered `Vec` with linear
//! scans. It knows nothing about HTTP or locking; the router wraps it in a
//! `RwLock` and every handler finishes its mutation under a single guard.
//!
//! Ids are opaque strings. Lookups compare them verbatim, so a path segment
//! that is not a stored id simply matches nothing. Titles are whatever JSON
//! value the client sent.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single todo item. `title` is omitted from JSON when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
}

impl TodoItem {
    fn new(title: Option<Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
        }
    }
}

const SEED_TITLES: [&str; 4] = ["ToDo #1", "ToDo #2", "ToDo #3", "ToDo #4"];

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    /// The collection every fresh process starts with.
    pub fn seeded() -> Self {
        Self {
            items: SEED_TITLES
                .iter()
                .map(|title| TodoItem::new(Some(Value::from(*title))))
                .collect(),
        }
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<TodoItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Append a new item with a freshly generated id.
    pub fn create(&mut self, title: Option<Value>) -> TodoItem {
        let item = TodoItem::new(title);
        self.items.push(item.clone());
        item
    }

    /// Replace the title of every item whose id matches.
    ///
    /// Returns the last replaced item, or `None` if no item matched.
    pub fn update(&mut self, id: &str, title: Option<Value>) -> Option<TodoItem> {
        let mut updated = None;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            *item = TodoItem {
                title: title.clone(),
                ..item.clone()
            };
            updated = Some(item.clone());
        }
        updated
    }

    /// Remove every item whose id matches, returning how many were removed.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }
}
