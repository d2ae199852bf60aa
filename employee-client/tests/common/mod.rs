//! In-process `employees` backend for integration tests
//!
//! Serves the REST contract over an in-memory store: ids are assigned
//! sequentially from 1, lists are ordered by id, unknown ids answer
//! `404 {"detail":"Employee not found"}` and a duplicate email answers
//! `400 {"detail":"Email already exists"}`.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use employee_client::{ClientConfig, EmployeeClient};
use shared::{Employee, EmployeePayload, ErrorBody, StatusMessage};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

#[derive(Default)]
struct Store {
    next_id: i64,
    employees: BTreeMap<i64, Employee>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct BackendState {
    store: Arc<Mutex<Store>>,
    failing: Arc<AtomicBool>,
}

impl BackendState {
    /// Insert directly, bypassing HTTP
    pub fn seed(&self, payload: EmployeePayload) -> Employee {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let emp = payload.with_id(store.next_id);
        store.employees.insert(emp.id, emp.clone());
        emp
    }

    pub fn get(&self, id: i64) -> Option<Employee> {
        self.store.lock().unwrap().employees.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().employees.len()
    }

    /// "METHOD /path" of every request served so far
    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    /// Make every endpoint answer 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self, request: String) -> Result<std::sync::MutexGuard<'_, Store>, (StatusCode, Json<ErrorBody>)> {
        let mut store = self.store.lock().unwrap();
        store.requests.push(request);
        if self.failing.load(Ordering::SeqCst) {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("database unavailable")),
            ));
        }
        Ok(store)
    }
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Employee not found")))
}

fn email_taken(store: &Store, email: &str, except: Option<i64>) -> bool {
    store
        .employees
        .values()
        .any(|e| e.email == email && Some(e.id) != except)
}

fn duplicate_email() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new("Email already exists")))
}

async fn list_employees(State(state): State<BackendState>) -> ApiResult<Vec<Employee>> {
    let store = state.enter("GET /employees".into())?;
    Ok(Json(store.employees.values().cloned().collect()))
}

async fn get_employee(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> ApiResult<Employee> {
    let store = state.enter(format!("GET /employees/{id}"))?;
    store.employees.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn create_employee(
    State(state): State<BackendState>,
    Json(data): Json<EmployeePayload>,
) -> ApiResult<Employee> {
    let mut store = state.enter("POST /employees".into())?;
    if email_taken(&store, &data.email, None) {
        return Err(duplicate_email());
    }
    store.next_id += 1;
    let emp = data.with_id(store.next_id);
    store.employees.insert(emp.id, emp.clone());
    Ok(Json(emp))
}

async fn update_employee(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
    Json(data): Json<EmployeePayload>,
) -> ApiResult<Employee> {
    let mut store = state.enter(format!("PUT /employees/{id}"))?;
    if !store.employees.contains_key(&id) {
        return Err(not_found());
    }
    if email_taken(&store, &data.email, Some(id)) {
        return Err(duplicate_email());
    }
    let emp = data.with_id(id);
    store.employees.insert(id, emp.clone());
    Ok(Json(emp))
}

async fn delete_employee(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusMessage> {
    let mut store = state.enter(format!("DELETE /employees/{id}"))?;
    store
        .employees
        .remove(&id)
        .map(|_| Json(StatusMessage::new("Employee deleted")))
        .ok_or_else(not_found)
}

pub fn router(state: BackendState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

pub struct TestBackend {
    pub base_url: String,
    pub state: BackendState,
}

impl TestBackend {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(10)
    }

    pub fn client(&self) -> EmployeeClient {
        EmployeeClient::from_config(&self.config()).unwrap()
    }
}

pub async fn spawn_backend() -> TestBackend {
    init_tracing();
    let state = BackendState::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn payload(name: &str, email: &str) -> EmployeePayload {
    EmployeePayload {
        name: name.into(),
        age: 30,
        position: "Eng".into(),
        department: "R&D".into(),
        email: email.into(),
        salary: 90000.0,
        experience: 5,
    }
}
