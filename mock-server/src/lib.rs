//! In-memory stand-in for the todo backend.
//!
//! # Design
//! Reproduces the backend's observable contract on a single `/api/todos`
//! route: GET returns the full collection as JSON ordered newest-first,
//! while POST/PUT/DELETE take `application/x-www-form-urlencoded` bodies
//! (`title=` for create, `id=` for toggle and delete). Ids are serial
//! integers that are never reused within a run and `created_at` is
//! assigned at insert time, matching the real server's `SERIAL` /
//! `TIMESTAMP DEFAULT CURRENT_TIMESTAMP` columns.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Form, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub title: String,
}

#[derive(Deserialize)]
pub struct IdForm {
    pub id: i64,
}

/// Body of a successful toggle: the new flag value, nothing else.
#[derive(Serialize, Deserialize)]
pub struct Toggled {
    pub completed: bool,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/api/todos",
            get(list_todos)
                .post(create_todo)
                .put(toggle_todo)
                .delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let mut todos = store.todos.clone();
    // Newest first; ids break the tie for items created within the same
    // timestamp granularity.
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Json(todos)
}

async fn create_todo(
    State(db): State<Db>,
    Form(input): Form<CreateForm>,
) -> Result<Json<Todo>, (StatusCode, String)> {
    if input.title.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "title is required".to_string()));
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        completed: false,
        created_at: Utc::now(),
    };
    store.todos.push(todo.clone());
    tracing::info!(id = todo.id, "created todo");
    Ok(Json(todo))
}

async fn toggle_todo(
    State(db): State<Db>,
    Form(input): Form<IdForm>,
) -> Result<Json<Toggled>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == input.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.completed = !todo.completed;
    tracing::info!(id = input.id, completed = todo.completed, "toggled todo");
    Ok(Json(Toggled {
        completed: todo.completed,
    }))
}

async fn delete_todo(
    State(db): State<Db>,
    Form(input): Form<IdForm>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != input.id);
    if store.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::info!(id = input.id, "deleted todo");
    Ok(StatusCode::OK)
}
