//! In-process stub of the GNS3 v2 REST API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use gns3tui::types::ServerAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct StubState {
    pub projects: Mutex<Vec<Value>>,
    pub requests: Mutex<Vec<Recorded>>,
    /// When set, every endpoint answers 500.
    pub failing: AtomicBool,
}

impl StubState {
    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded { method, path, body });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than GETs.
    pub fn mutations(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != "GET")
            .collect()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }
}

pub fn project(name: &str, id: &str, status: &str) -> Value {
    json!({
        "name": name,
        "project_id": id,
        "status": status,
        "path": format!("/opt/gns3/projects/{id}"),
        "filename": format!("{name}.gns3"),
        "auto_open": false,
        "auto_start": false,
        "auto_close": true,
        "scene_height": 1000,
        "scene_width": 2000
    })
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "controller exploded").into_response()
}

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("Project ID {id} doesn't exist"), "status": 404 })),
    )
        .into_response()
}

async fn version(State(state): State<Arc<StubState>>) -> Response {
    state.record("GET", "/v2/version".into(), None);
    if state.failing() {
        return server_error();
    }
    Json(json!({ "version": "2.2.44", "local": false })).into_response()
}

async fn list_projects(State(state): State<Arc<StubState>>) -> Response {
    state.record("GET", "/v2/projects".into(), None);
    if state.failing() {
        return server_error();
    }
    Json(Value::Array(state.projects.lock().unwrap().clone())).into_response()
}

async fn get_project(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    state.record("GET", format!("/v2/projects/{id}"), None);
    if state.failing() {
        return server_error();
    }
    let projects = state.projects.lock().unwrap();
    match projects.iter().find(|p| p["project_id"] == id.as_str()) {
        Some(p) => Json(p.clone()).into_response(),
        None => not_found(&id),
    }
}

async fn delete_project(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    state.record("DELETE", format!("/v2/projects/{id}"), None);
    if state.failing() {
        return server_error();
    }
    let mut projects = state.projects.lock().unwrap();
    let before = projects.len();
    projects.retain(|p| p["project_id"] != id.as_str());
    if projects.len() == before {
        return not_found(&id);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn update_project(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.record("PUT", format!("/v2/projects/{id}"), Some(body.clone()));
    if state.failing() {
        return server_error();
    }
    let mut projects = state.projects.lock().unwrap();
    match projects.iter_mut().find(|p| p["project_id"] == id.as_str()) {
        Some(p) => {
            p["name"] = body["name"].clone();
            Json(p.clone()).into_response()
        }
        None => not_found(&id),
    }
}

async fn duplicate_project(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.record(
        "POST",
        format!("/v2/projects/{id}/duplicate"),
        Some(body.clone()),
    );
    if state.failing() {
        return server_error();
    }
    let mut projects = state.projects.lock().unwrap();
    let Some(source) = projects.iter().find(|p| p["project_id"] == id.as_str()) else {
        return not_found(&id);
    };
    let new_id = format!("{id}-copy{}", projects.len());
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let mut copy = source.clone();
    copy["project_id"] = json!(new_id);
    copy["name"] = json!(name);
    copy["status"] = json!("closed");
    copy["path"] = json!(format!("/opt/gns3/projects/{new_id}"));
    projects.push(copy.clone());
    (StatusCode::CREATED, Json(copy)).into_response()
}

pub struct StubServer {
    pub addr: ServerAddr,
    pub state: Arc<StubState>,
}

/// Serve the stub on an ephemeral localhost port seeded with `projects`.
pub async fn spawn(projects: Vec<Value>) -> StubServer {
    let state = Arc::new(StubState::default());
    *state.projects.lock().unwrap() = projects;

    let app = Router::new()
        .route("/v2/version", get(version))
        .route("/v2/projects", get(list_projects))
        .route(
            "/v2/projects/{id}",
            get(get_project).delete(delete_project).put(update_project),
        )
        .route("/v2/projects/{id}/duplicate", post(duplicate_project))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let local: SocketAddr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve stub") });

    StubServer {
        addr: ServerAddr::new("127.0.0.1", local.port()),
        state,
    }
}

/// An address nothing listens on.
pub async fn dead_addr() -> ServerAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    ServerAddr::new("127.0.0.1", port)
}
