//! DTOs for the todo plugin API.
//!
//! # Design
//! These mirror the server's JSON but are defined independently, so the
//! client does not pull in Axum. The live integration test catches schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single todo item. The server omits `title` when the item has none, and
/// stores whatever JSON value it was given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
}

impl TodoItem {
    /// The title, when it is a JSON string.
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_ref().and_then(Value::as_str)
    }
}

/// Request payload for both create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TodoInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Metadata returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

/// Envelope returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<TodoItem>,
}

/// Body returned by `DELETE /todos/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAck {
    pub ok: bool,
}
