use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}

/// Body of POST and PUT. Any `id` the client sends is ignored: POST assigns
/// a fresh one and PUT takes it from the path.
#[derive(Deserialize)]
pub struct TodoInput {
    pub text: String,
}

/// Insertion-ordered store; list order is creation order.
#[derive(Default)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Store {
    pub fn seeded(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    fn insert(&mut self, text: String) -> Todo {
        let todo = Todo {
            id: self.next_id.max(1),
            text,
        };
        self.next_id = todo.id + 1;
        self.todos.push(todo.clone());
        todo
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(todos)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input.text);
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.find_mut(id).ok_or(StatusCode::NOT_FOUND)?;
    todo.text = input.text;
    debug!(id, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|todo| todo.id != id);
    if store.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    debug!(id, "deleted todo");
    Ok(Json(json!({ "detail": "Todo deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 3,
            text: "Test".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["text"], "Test");
    }

    #[test]
    fn input_ignores_client_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":1700000000000,"text":"Walk dog"}"#).unwrap();
        assert_eq!(input.text, "Walk dog");
    }

    #[test]
    fn input_rejects_missing_text() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = Store::default();
        assert_eq!(store.insert("a".to_string()).id, 1);
        assert_eq!(store.insert("b".to_string()).id, 2);
    }

    #[test]
    fn seeded_store_continues_after_highest_id() {
        let mut store = Store::seeded(vec![
            Todo {
                id: 7,
                text: "x".to_string(),
            },
            Todo {
                id: 2,
                text: "y".to_string(),
            },
        ]);
        assert_eq!(store.insert("z".to_string()).id, 8);
        let ids: Vec<u64> = store.todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![7, 2, 8]);
    }
}
