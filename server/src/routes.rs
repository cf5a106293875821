//! Axum handlers mapping the todo endpoints onto `TodoStore`.
//!
//! Missing ids are answered with `null` and status 200, and request bodies
//! never cause a client error: a body that is not a JSON object sent as
//! `application/json` is read as "no title".

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::store::TodoItem;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    title: "ToDo API",
    version: "1.0.0",
    description: "Plugin to manage a ToDo list for ChatGPT. You can add, remove, edit and view items",
    author: "Jordi Ayala",
};

#[derive(Debug, Serialize)]
pub struct TodoList {
    pub todos: Vec<TodoItem>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub ok: bool,
}

/// Body of POST and PUT requests.
#[derive(Debug, Default)]
pub struct TodoInput {
    pub title: Option<Value>,
}

impl TodoInput {
    /// Take `title` from a JSON object body, whatever its type. Bodies that
    /// are not JSON objects, or not sent as JSON, carry no title.
    pub fn from_json(body: Result<Json<Value>, JsonRejection>) -> Self {
        match body {
            Ok(Json(Value::Object(mut fields))) => Self {
                title: fields.remove("title"),
            },
            Ok(Json(_)) => Self::default(),
            Err(rejection) => {
                tracing::debug!("ignoring todo body: {rejection}");
                Self::default()
            }
        }
    }
}

// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(SERVICE_INFO)
}

// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Json<TodoList> {
    let store = state.store.read().await;
    Json(TodoList {
        todos: store.list().to_vec(),
    })
}

// GET /todos/{id}
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> Json<Option<TodoItem>> {
    Json(state.store.read().await.get(&id))
}

// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<TodoItem> {
    let input = TodoInput::from_json(body);
    let todo = state.store.write().await.create(input.title);
    tracing::info!(id = %todo.id, "created todo");
    Json(todo)
}

// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<Option<TodoItem>> {
    let input = TodoInput::from_json(body);
    let updated = state.store.write().await.update(&id, input.title);
    if updated.is_none() {
        tracing::debug!(%id, "update matched no todo");
    }
    Json(updated)
}

// DELETE /todos/{id}
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Json<DeleteAck> {
    let removed = state.store.write().await.delete(&id);
    tracing::debug!(%id, removed, "deleted todos");
    Json(DeleteAck { ok: true })
}
