//! Shared harness for the HTTP integration tests
//!
//! Each test gets its own embedded database under a temp directory and
//! drives the full router (middleware included) through `tower::Service`,
//! without binding a socket.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::Service;

use hr_server::core::server;
use hr_server::{Config, ServerState};

pub struct TestApp {
    router: Router,
    _work_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let work_dir = tempfile::tempdir().expect("create temp work dir");
        let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config)
            .await
            .expect("initialize server state");

        Self {
            router: server::app(state),
            _work_dir: work_dir,
        }
    }

    pub async fn request(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self.router.call(request).await.expect("route request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read response body")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse response json")
        };

        (status, value)
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&mut self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    // ===== Seed helpers =====

    pub async fn seed_department(&mut self, name: &str) -> String {
        let (status, body) = self
            .post(
                "/departments",
                json!({
                    "name": name,
                    "location": "Building A",
                    "description": "Test department",
                    "extension": "1234",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed department: {body}");
        id_of(&body)
    }

    pub async fn seed_benefit(&mut self, name: &str, value: f64, active: bool) -> String {
        let (status, body) = self
            .post(
                "/benefits",
                json!({
                    "name": name,
                    "description": "Test benefit",
                    "value": value,
                    "type": "health",
                    "active": active,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed benefit: {body}");
        id_of(&body)
    }

    pub async fn seed_employee(
        &mut self,
        name: &str,
        cpf: &str,
        department_id: Option<&str>,
        benefits_id: &[&str],
    ) -> String {
        let (status, body) = self
            .post(
                "/employees",
                json!({
                    "name": name,
                    "cpf": cpf,
                    "position": "Engineer",
                    "admission_date": "2024-03-15T09:00:00Z",
                    "department_id": department_id,
                    "benefits_id": benefits_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed employee: {body}");
        id_of(&body)
    }

    pub async fn seed_payroll(&mut self, employee_id: &str, net_salary: f64) -> String {
        let (status, body) = self
            .post(
                "/payroll",
                json!({
                    "employee_id": employee_id,
                    "deductions": 150.0,
                    "discount": 50.0,
                    "net_salary": net_salary,
                    "reference_month": "2024-03",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed payroll: {body}");
        id_of(&body)
    }

    pub async fn seed_assignment(&mut self, employee_id: &str, benefit_id: &str) -> String {
        let (status, body) = self
            .post(
                "/employee_benefit",
                json!({
                    "employee_id": employee_id,
                    "benefit_id": benefit_id,
                    "start_date": "2024-03-15",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed assignment: {body}");
        id_of(&body)
    }
}

/// Extract the `id` field of a created document
pub fn id_of(body: &Value) -> String {
    body["id"]
        .as_str()
        .unwrap_or_else(|| panic!("response has no id: {body}"))
        .to_string()
}

/// Collect the string items of a JSON array field
pub fn string_items(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap_or_else(|| panic!("expected an array: {value}"))
        .iter()
        .map(|v| v.as_str().expect("array of strings").to_string())
        .collect()
}
