//! Test doubles: an in-memory backend and an axum stub server.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::client::Backend;
use crate::error::{FetchError, SubmitError};
use crate::record::Record;

pub fn records(value: Value) -> Vec<Record> {
    serde_json::from_value(value).expect("array of objects")
}

pub fn record(value: Value) -> Record {
    serde_json::from_value(value).expect("object")
}

/// A call observed by [`MockBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, Record),
}

/// In-memory backend that behaves like the REST service: a POST appends to
/// the collection the next GET returns.
#[derive(Default)]
pub struct MockBackend {
    collections: RefCell<HashMap<String, Vec<Record>>>,
    failing_gets: RefCell<HashSet<String>>,
    failing_posts: RefCell<HashSet<String>>,
    calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, rows: Vec<Record>) -> Self {
        self.collections.borrow_mut().insert(path.to_string(), rows);
        self
    }

    pub fn fail_get(&self, path: &str) {
        self.failing_gets.borrow_mut().insert(path.to_string());
    }

    pub fn fail_post(&self, path: &str) {
        self.failing_posts.borrow_mut().insert(path.to_string());
    }

    pub fn recover(&self) {
        self.failing_gets.borrow_mut().clear();
        self.failing_posts.borrow_mut().clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn get(&self, path: &str) -> Result<Vec<Record>, FetchError> {
        self.calls.borrow_mut().push(Call::Get(path.to_string()));
        if self.failing_gets.borrow().contains(path) {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: 500,
            });
        }
        Ok(self
            .collections
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    async fn post(&self, path: &str, body: &Record) -> Result<Record, SubmitError> {
        self.calls
            .borrow_mut()
            .push(Call::Post(path.to_string(), body.clone()));
        if self.failing_posts.borrow().contains(path) {
            return Err(SubmitError::Status {
                path: path.to_string(),
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        self.collections
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(body.clone());
        Ok(body.clone())
    }
}

#[derive(Default)]
struct StubData {
    collections: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    requests: Vec<(String, String)>,
    posted: HashMap<String, Vec<Value>>,
    content_types: Vec<String>,
}

#[derive(Clone, Default)]
struct StubState {
    inner: Arc<Mutex<StubData>>,
}

/// Real HTTP server on a random local port serving `/api/:collection`
pub struct StubServer {
    base_url: String,
    state: StubState,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new()
            .route("/api/:collection", get(list).post(create))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn seed(&self, path: &str, rows: Value) {
        let rows = match rows {
            Value::Array(items) => items,
            other => vec![other],
        };
        self.state
            .inner
            .lock()
            .unwrap()
            .collections
            .insert(path.to_string(), rows);
    }

    pub fn fail(&self, path: &str) {
        self.state.inner.lock().unwrap().failing.insert(path.to_string());
    }

    /// Every request seen, as (method, path)
    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.inner.lock().unwrap().requests.clone()
    }

    pub fn posted(&self, path: &str) -> Vec<Value> {
        self.state
            .inner
            .lock()
            .unwrap()
            .posted
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.state.inner.lock().unwrap().content_types.clone()
    }
}

async fn list(State(state): State<StubState>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    let mut data = state.inner.lock().unwrap();
    data.requests.push(("GET".to_string(), path.clone()));

    if data.failing.contains(&path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "stub failure").into_response();
    }

    let rows = data.collections.get(&path).cloned().unwrap_or_default();
    Json(Value::Array(rows)).into_response()
}

async fn create(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let mut data = state.inner.lock().unwrap();
    data.requests.push(("POST".to_string(), path.clone()));

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    data.content_types.push(content_type);

    if data.failing.contains(&path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "stub failure").into_response();
    }

    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    data.posted.entry(path.clone()).or_default().push(value.clone());
    data.collections.entry(path).or_default().push(value.clone());

    (StatusCode::CREATED, Json(value)).into_response()
}
