//! Department endpoints and roster synchronization tests

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, string_items};

async fn roster(app: &mut TestApp, department_id: &str) -> Vec<String> {
    let (status, body) = app.get(&format!("/departments/{department_id}")).await;
    assert_eq!(status, StatusCode::OK, "fetch department: {body}");
    string_items(&body["employee_ids"])
}

#[tokio::test]
async fn employee_create_appends_to_roster() {
    let mut app = TestApp::new().await;
    let department_id = app.seed_department("Engineering").await;

    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[])
        .await;

    assert_eq!(roster(&mut app, &department_id).await, vec![employee_id]);
}

#[tokio::test]
async fn employee_department_change_moves_roster_entry() {
    let mut app = TestApp::new().await;
    let old_department = app.seed_department("Engineering").await;
    let new_department = app.seed_department("Design").await;
    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&old_department), &[])
        .await;

    let (status, updated) = app
        .put(
            &format!("/employees/{employee_id}"),
            json!({"department_id": new_department}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department_id"], new_department);

    assert!(roster(&mut app, &old_department).await.is_empty());
    assert_eq!(roster(&mut app, &new_department).await, vec![employee_id]);
}

#[tokio::test]
async fn unchanged_department_does_not_touch_roster() {
    let mut app = TestApp::new().await;
    let department_id = app.seed_department("Engineering").await;
    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[])
        .await;

    let (status, _) = app
        .put(
            &format!("/employees/{employee_id}"),
            json!({"position": "Staff Engineer", "department_id": department_id}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Still exactly one roster entry, no duplicate from the re-add
    assert_eq!(roster(&mut app, &department_id).await, vec![employee_id]);
}

#[tokio::test]
async fn employee_delete_removes_from_roster() {
    let mut app = TestApp::new().await;
    let department_id = app.seed_department("Engineering").await;
    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[])
        .await;

    let (status, _) = app.delete(&format!("/employees/{employee_id}")).await;
    assert_eq!(status, StatusCode::OK);

    assert!(roster(&mut app, &department_id).await.is_empty());
}

#[tokio::test]
async fn missing_department_blocks_employee_create() {
    let mut app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/employees",
            json!({
                "name": "Alice",
                "cpf": "12345678901",
                "position": "Engineer",
                "admission_date": "2024-03-15T09:00:00Z",
                "department_id": "department:doesnotexist",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Department not found");

    // Nothing was persisted
    let (_, count) = app.get("/employees/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn first_missing_benefit_blocks_employee_create() {
    let mut app = TestApp::new().await;
    let benefit_id = app.seed_benefit("Health", 500.0, true).await;

    let (status, body) = app
        .post(
            "/employees",
            json!({
                "name": "Alice",
                "cpf": "12345678901",
                "position": "Engineer",
                "admission_date": "2024-03-15T09:00:00Z",
                "benefits_id": [benefit_id, "benefit:doesnotexist"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("benefit:doesnotexist"),
        "detail should name the missing entry: {body}"
    );

    let (_, count) = app.get("/employees/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn department_crud_round_trip() {
    let mut app = TestApp::new().await;

    let (status, created) = app
        .post(
            "/departments",
            json!({
                "name": "Engineering",
                "location": "Building A",
                "description": "Product engineering",
                "extension": "4100",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["employee_ids"], json!([]));
    let id = common::id_of(&created);

    let (status, updated) = app
        .put(&format!("/departments/{id}"), json!({"location": "Building B"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["location"], "Building B");
    assert_eq!(updated["name"], "Engineering");
    assert_eq!(updated["extension"], "4100");

    let (status, body) = app.delete(&format!("/departments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Department deleted");

    let (status, _) = app.get(&format!("/departments/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/departments/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn department_name_search_is_paginated() {
    let mut app = TestApp::new().await;
    app.seed_department("Engineering").await;
    app.seed_department("Engine Room").await;
    app.seed_department("Design").await;

    let (status, page) = app.get("/departments/get_by_name?name=engine&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 1);

    let (status, page) = app
        .get("/departments/get_by_name?name=engine&skip=1&limit=10")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn departments_listing_an_employee() {
    let mut app = TestApp::new().await;
    let department_id = app.seed_department("Engineering").await;
    app.seed_department("Design").await;
    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[])
        .await;

    let (status, departments) = app
        .get(&format!("/departments/get_by_employee/{employee_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let departments = departments.as_array().unwrap().clone();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0]["id"], department_id);

    // Unknown employees simply match nothing
    let (status, departments) = app
        .get("/departments/get_by_employee/employee:doesnotexist")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(departments.as_array().unwrap().len(), 0);
}
