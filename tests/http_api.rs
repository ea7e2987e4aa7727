//! HTTP API Contract Tests
//!
//! Router-level tests driving the axum service directly:
//! - 200 for successful CRUD and report calls
//! - 400 for missing/invalid lookup keys and partial composite keys
//! - 404 for missing rows
//! - 409 for duplicate keys and dangling foreign keys

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use companydb::config::ServerConfig;
use companydb::db::Database;
use companydb::http_server::HttpServer;
use companydb::model::Department;
use companydb::store;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_router() -> (Router, Arc<Database>) {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let router = HttpServer::new(ServerConfig::default(), db.clone()).router();
    (router, db)
}

fn seed_department(db: &Database, dnumber: i64) {
    store::department::insert(
        db,
        &Department {
            dname: "Research".into(),
            dnumber,
            mgr_ssn: None,
            mgr_start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        },
    )
    .unwrap();
}

fn employee_body(ssn: i64, dno: i64, salary: i64) -> Value {
    json!({
        "Fname": "John",
        "Lname": "Smith",
        "Ssn": ssn,
        "Bdate": "1965-01-09",
        "Address": "731 Fondren, Houston, TX",
        "Sex": "M",
        "Salary": salary,
        "Super_ssn": null,
        "Dno": dno
    })
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// =============================================================================
// Index and Reports
// =============================================================================

#[tokio::test]
async fn test_index_page_serves() {
    let (router, _db) = test_router();
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reports_return_empty_arrays_on_empty_database() {
    let (router, _db) = test_router();
    for uri in [
        "/high_dept_salary",
        "/dept_details",
        "/project_details",
        "/projects_multiple_employees",
        "/employee_manager_details",
    ] {
        let (status, body) = send(&router, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

// =============================================================================
// Employee CRUD over HTTP
// =============================================================================

#[tokio::test]
async fn test_employee_create_then_read_roundtrip() {
    let (router, db) = test_router();
    seed_department(&db, 5);

    let (status, body) = send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 40000)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Employee"]["SSN"], 100);

    let (status, body) = send(&router, Method::GET, "/get_employee?key=Ssn&value=100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Employee"]["Birthday"], "1965-01-09");
    assert_eq!(body["Employee"]["Salary"], 40000);
    assert_eq!(body["Employee"]["Department Number"], 5);
}

#[tokio::test]
async fn test_get_employee_invalid_key_is_400() {
    let (router, _db) = test_router();
    let (status, body) = send(
        &router,
        Method::GET,
        "/get_employee?key=NoSuchColumn&value=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "Invalid key provided.");
}

#[tokio::test]
async fn test_get_employee_missing_value_is_400() {
    let (router, _db) = test_router();
    let (status, body) = send(&router, Method::GET, "/get_employee?key=Ssn", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "Both key and value are required.");
}

#[tokio::test]
async fn test_get_employee_malformed_value_is_400() {
    let (router, _db) = test_router();
    let (status, _body) = send(
        &router,
        Method::GET,
        "/get_employee?key=Ssn&value=notanumber",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_employee_missing_row_is_404() {
    let (router, _db) = test_router();
    let (status, body) = send(&router, Method::GET, "/get_employee?key=Ssn&value=999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Error"], "Employee not found.");
}

#[tokio::test]
async fn test_delete_missing_employee_is_404() {
    let (router, _db) = test_router();
    let (status, _body) = send(&router, Method::DELETE, "/delete_employee/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_employee_is_409() {
    let (router, db) = test_router();
    seed_department(&db, 5);

    let (status, _) = send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 40000)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 50000)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["Message"], "Error adding row.");
    assert!(body["Error"].as_str().is_some());
}

#[tokio::test]
async fn test_dangling_foreign_key_is_409() {
    let (router, _db) = test_router();
    // No department 5 exists.
    let (status, _body) = send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 40000)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_employee_applies_partial_fields() {
    let (router, db) = test_router();
    seed_department(&db, 5);
    send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 40000)),
    )
    .await;

    let (status, _) = send(
        &router,
        Method::PUT,
        "/update_employee/100",
        Some(json!({ "Salary": 45000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&router, Method::GET, "/get_employee?key=Ssn&value=100", None).await;
    assert_eq!(body["Employee"]["Salary"], 45000);
    assert_eq!(body["Employee"]["First Name"], "John");
}

// =============================================================================
// Composite-Key Routes
// =============================================================================

#[tokio::test]
async fn test_composite_update_requires_full_key() {
    let (router, _db) = test_router();
    let (status, body) = send(
        &router,
        Method::PUT,
        "/update_works_on?Essn=100",
        Some(json!({ "Hours": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "Both Essn and Pno are required.");
}

#[tokio::test]
async fn test_composite_delete_requires_full_key() {
    let (router, _db) = test_router();
    let (status, _body) = send(
        &router,
        Method::DELETE,
        "/delete_dept_location?Dlocation=Houston",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dept_location_full_key_crud() {
    let (router, db) = test_router();
    seed_department(&db, 5);

    let (status, _) = send(
        &router,
        Method::POST,
        "/add_dept_location",
        Some(json!({ "Dnumber": 5, "Dlocation": "Houston" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &router,
        Method::GET,
        "/get_dept_location?key=Dlocation&value=Houston",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Department Location"]["Department Number"], 5);

    let (status, _) = send(
        &router,
        Method::DELETE,
        "/delete_dept_location?Dnumber=5&Dlocation=Houston",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        Method::DELETE,
        "/delete_dept_location?Dnumber=5&Dlocation=Houston",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Reports over HTTP
// =============================================================================

#[tokio::test]
async fn test_high_dept_salary_report_shape() {
    let (router, db) = test_router();
    seed_department(&db, 5);
    send(
        &router,
        Method::POST,
        "/add_employee",
        Some(employee_body(100, 5, 40000)),
    )
    .await;

    let (status, body) = send(&router, Method::GET, "/high_dept_salary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["Department Name"], "Research");
    assert_eq!(body[0]["Number of Employees"], 1);
}
