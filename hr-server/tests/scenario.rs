//! End-to-end walk across departments, benefits, employees and payroll

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::TestApp;

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let mut app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn department_lifecycle_leaves_members_dangling() {
    let mut app = TestApp::new().await;

    let department_id = app.seed_department("Engineering").await;
    let benefit_id = app.seed_benefit("Health Plan", 500.0, true).await;
    let employee_id = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[&benefit_id])
        .await;

    // The enrollment is visible from the benefit side
    let (status, enrolled) = app
        .get(&format!("/employees/get_by_benefit/{benefit_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let enrolled = enrolled.as_array().unwrap().clone();
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0]["id"], employee_id);

    // Deleting the department does not touch its members
    let (status, _) = app.delete(&format!("/departments/{department_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/departments/{department_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, employee) = app.get(&format!("/employees/{employee_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employee["department_id"], department_id);
    assert_eq!(employee["benefits_id"], json!([benefit_id]));
}

#[tokio::test]
async fn full_onboarding_walkthrough() {
    let mut app = TestApp::new().await;

    let department_id = app.seed_department("Engineering").await;
    let health = app.seed_benefit("Health Plan", 500.0, true).await;
    let gym = app.seed_benefit("Gym Pass", 80.0, true).await;

    let employee_id = app
        .seed_employee("Alice Johnson", "12345678901", Some(&department_id), &[&health])
        .await;

    // Enroll in a second benefit through an assignment and the record itself
    app.seed_assignment(&employee_id, &gym).await;
    let (status, updated) = app
        .put(
            &format!("/employees/{employee_id}"),
            json!({"benefits_id": [health, gym]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["benefits_id"].as_array().unwrap().len(), 2);

    // First payday
    let payroll_id = app.seed_payroll(&employee_id, 5200.0).await;
    let (status, _) = app
        .put(
            &format!("/employees/{employee_id}"),
            json!({"pay_roll_id": payroll_id}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, payrolls) = app
        .get(&format!("/payroll/get_by_department?department_id={department_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payrolls.as_array().unwrap().len(), 1);
    assert_eq!(payrolls[0]["id"], payroll_id);

    // The department now exposes both benefits through its roster
    let (status, department_benefits) = app
        .get(&format!("/benefits/departments/{department_id}/benefits"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(department_benefits.as_array().unwrap().len(), 2);

    // Offboarding: the payroll cascade clears the reference, the employee
    // delete clears the roster
    let (status, body) = app.delete(&format!("/payroll/{payroll_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employees_updated"], 1);

    let (_, employee) = app.get(&format!("/employees/{employee_id}")).await;
    assert_eq!(employee["pay_roll_id"], Value::Null);

    let (status, _) = app.delete(&format!("/employees/{employee_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, department) = app.get(&format!("/departments/{department_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(department["employee_ids"], json!([]));

    let (_, count) = app.get("/employees/count").await;
    assert_eq!(count["count"], 0);
}
