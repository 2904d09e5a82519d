//! Payroll endpoint tests

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{TestApp, id_of};

#[tokio::test]
async fn create_and_fetch_payroll() {
    let mut app = TestApp::new().await;
    let employee_id = app.seed_employee("Alice", "12345678901", None, &[]).await;

    let (status, created) = app
        .post(
            "/payroll",
            json!({
                "employee_id": employee_id,
                "deductions": 320.0,
                "discount": 75.5,
                "net_salary": 4890.25,
                "reference_month": "2024-03",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["employee_id"], employee_id);
    assert_eq!(created["deductions"], 320.0);
    assert_eq!(created["discount"], 75.5);
    assert_eq!(created["net_salary"], 4890.25);
    assert_eq!(created["reference_month"], "2024-03");

    let id = id_of(&created);
    let (status, fetched) = app.get(&format!("/payroll/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, page) = app.get("/payroll/get_all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
    assert_eq!(page["data"].as_array().unwrap().len(), 1);

    let (_, count) = app.get("/payroll/count").await;
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn create_requires_an_existing_employee() {
    let mut app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/payroll",
            json!({
                "employee_id": "employee:doesnotexist",
                "deductions": 100.0,
                "discount": 0.0,
                "net_salary": 3000.0,
                "reference_month": "2024-03",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Employee not found");

    let (_, count) = app.get("/payroll/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn amounts_and_reference_month_are_validated() {
    let mut app = TestApp::new().await;
    let employee_id = app.seed_employee("Alice", "12345678901", None, &[]).await;

    for bad_month in ["2024-13", "2024/01", "24-01", "March 2024"] {
        let (status, body) = app
            .post(
                "/payroll",
                json!({
                    "employee_id": employee_id,
                    "deductions": 0.0,
                    "discount": 0.0,
                    "net_salary": 3000.0,
                    "reference_month": bad_month,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "month {bad_month}");
        assert!(body["detail"].as_str().unwrap().contains("YYYY-MM"));
    }

    let (status, body) = app
        .post(
            "/payroll",
            json!({
                "employee_id": employee_id,
                "deductions": 0.0,
                "discount": 0.0,
                "net_salary": -1.0,
                "reference_month": "2024-03",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("net_salary"));

    // Update paths run the same checks
    let payroll_id = app.seed_payroll(&employee_id, 3000.0).await;
    let (status, _) = app
        .put(
            &format!("/payroll/{payroll_id}"),
            json!({"reference_month": "2024-00"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn partial_update_preserves_other_fields() {
    let mut app = TestApp::new().await;
    let employee_id = app.seed_employee("Alice", "12345678901", None, &[]).await;
    let payroll_id = app.seed_payroll(&employee_id, 3000.0).await;

    let (status, updated) = app
        .put(
            &format!("/payroll/{payroll_id}"),
            json!({"net_salary": 3500.0, "reference_month": "2024-04"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["net_salary"], 3500.0);
    assert_eq!(updated["reference_month"], "2024-04");
    assert_eq!(updated["employee_id"], employee_id);
    assert_eq!(updated["deductions"], 150.0);
    assert_eq!(updated["discount"], 50.0);
}

#[tokio::test]
async fn delete_clears_employee_references() {
    let mut app = TestApp::new().await;
    let first = app.seed_employee("Alice", "12345678901", None, &[]).await;
    let second = app.seed_employee("Bob", "22345678901", None, &[]).await;
    let untouched = app.seed_employee("Carol", "32345678901", None, &[]).await;
    let payroll_id = app.seed_payroll(&first, 3000.0).await;
    let other_payroll = app.seed_payroll(&untouched, 2500.0).await;

    for employee in [&first, &second] {
        let (status, _) = app
            .put(
                &format!("/employees/{employee}"),
                json!({"pay_roll_id": payroll_id}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = app
        .put(
            &format!("/employees/{untouched}"),
            json!({"pay_roll_id": other_payroll}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&format!("/payroll/{payroll_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Payroll deleted");
    assert_eq!(body["employees_updated"], 2);

    for employee in [&first, &second] {
        let (_, fetched) = app.get(&format!("/employees/{employee}")).await;
        assert_eq!(fetched["pay_roll_id"], Value::Null, "employee {employee}");
    }
    // Employees on a different payroll keep their reference
    let (_, fetched) = app.get(&format!("/employees/{untouched}")).await;
    assert_eq!(fetched["pay_roll_id"], other_payroll);

    let (status, _) = app.get(&format!("/payroll/{payroll_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.delete(&format!("/payroll/{payroll_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/payroll/employee:abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn payrolls_of_a_department_follow_roster_order() {
    let mut app = TestApp::new().await;
    let department_id = app.seed_department("Engineering").await;
    let first = app
        .seed_employee("Alice", "12345678901", Some(&department_id), &[])
        .await;
    app.seed_employee("Bob", "22345678901", Some(&department_id), &[])
        .await;
    let third = app
        .seed_employee("Carol", "32345678901", Some(&department_id), &[])
        .await;

    // Only the first and third roster members have a payroll
    let first_payroll = app.seed_payroll(&first, 3000.0).await;
    let third_payroll = app.seed_payroll(&third, 2800.0).await;

    let (status, body) = app
        .get(&format!("/payroll/get_by_department?department_id={department_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let got: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(got, vec![first_payroll.as_str(), third_payroll.as_str()]);

    let empty_department = app.seed_department("Design").await;
    let (status, body) = app
        .get(&format!(
            "/payroll/get_by_department?department_id={empty_department}"
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = app
        .get("/payroll/get_by_department?department_id=department:doesnotexist")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Department not found");
}
