use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_rental::config::EnvironmentConfig;
use vehicle_rental::repositories::MemoryRentalStore;
use vehicle_rental::{create_router, AppState};

// Función helper para crear la app de test
fn create_test_app() -> Router {
    let store = Arc::new(MemoryRentalStore::new());
    create_router(AppState::new(store, EnvironmentConfig::default()))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn register_fleet(app: &Router) {
    let (status, _) = call(
        app,
        "POST",
        "/api/vehicles",
        Some(json!({
            "license_plate": "MH12AB1234",
            "make": "Hyundai",
            "model": "Creta",
            "year": 2022,
            "mileage": 15000,
            "daily_rate": "1500"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        app,
        "POST",
        "/api/customers",
        Some(json!({
            "name": "Asha Rao",
            "contact_info": "+91 98200 00000",
            "license_number": "MH14XY5678"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["customer_id"], 1);
}

fn reservation(start: &str, end: &str) -> Value {
    json!({
        "vehicle_plate": "MH12AB1234",
        "customer_id": 1,
        "start_date": start,
        "end_date": end
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = call(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_booking_scenario() {
    let app = create_test_app();
    register_fleet(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2024-06-01T00:00", "2024-06-03T00:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total_cost"], "3000");
    assert_eq!(body["data"]["reservation_id"], 1);

    let (_, vehicles) = call(&app, "GET", "/api/vehicles", None).await;
    assert_eq!(vehicles[0]["status"], "Rented");

    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2024-06-02T00:00", "2024-06-05T00:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "OVERLAP_CONFLICT");

    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2024-06-03 00:00:00", "2024-06-05 00:00:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total_cost"], "3000");

    let (status, list) = call(&app, "GET", "/api/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["make"], "Hyundai");
    assert_eq!(list[0]["customer_name"], "Asha Rao");
}

#[tokio::test]
async fn test_invalid_date_range_is_client_error() {
    let app = create_test_app();

    // Sin vehículos ni clientes: el orden de fechas se valida primero
    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2024-06-05", "2024-06-01")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_unknown_references_are_distinguishable() {
    let app = create_test_app();
    register_fleet(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "vehicle_plate": "KA01ZZ0001",
            "customer_id": 1,
            "start_date": "2024-06-01",
            "end_date": "2024-06-02"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_VEHICLE");

    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "vehicle_plate": "MH12AB1234",
            "customer_id": 77,
            "start_date": "2024-06-01",
            "end_date": "2024-06-02"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_CUSTOMER");

    let (status, body) = call(
        &app,
        "POST",
        "/api/maintenance",
        Some(json!({
            "vehicle_plate": "KA01ZZ0001",
            "service_date": "2024-06-01 10:00",
            "description": "Tire Rotation",
            "cost": "1200.00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_VEHICLE");
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let app = create_test_app();
    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("01/06/2024", "2024-06-03")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_maintenance_marks_vehicle() {
    let app = create_test_app();
    register_fleet(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/maintenance",
        Some(json!({
            "vehicle_plate": "mh12ab1234",
            "service_date": "2024-06-01 10:00",
            "description": "Full Service",
            "cost": "4500.50"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["vehicle_plate"], "MH12AB1234");

    let (_, available) = call(&app, "GET", "/api/vehicles/available", None).await;
    assert_eq!(available.as_array().unwrap().len(), 0);

    let (_, records) = call(&app, "GET", "/api/maintenance", None).await;
    assert_eq!(records[0]["model"], "Creta");
    assert_eq!(records[0]["cost"], "4500.50");

    let (_, dashboard) = call(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(dashboard["maintenance_vehicles"], 1);
    assert_eq!(dashboard["available_vehicles"], 0);
}

#[tokio::test]
async fn test_vehicle_validation_and_duplicates() {
    let app = create_test_app();
    register_fleet(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(json!({
            "license_plate": "MH12AB1234",
            "make": "Tata",
            "model": "Nexon",
            "year": 2021,
            "mileage": 100,
            "daily_rate": 1200
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, body) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(json!({
            "license_plate": "DL01XY0001",
            "make": "Tata",
            "model": "Nexon",
            "year": 2021,
            "mileage": 100,
            "daily_rate": "0"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

fn vehicle_with_rate(plate: &str, daily_rate: &str) -> Value {
    json!({
        "license_plate": plate,
        "make": "Mercedes-Benz",
        "model": "S-Class",
        "year": 2024,
        "mileage": 500,
        "daily_rate": daily_rate
    })
}

#[tokio::test]
async fn test_daily_rate_is_bounded_by_column_precision() {
    let app = create_test_app();

    let (status, body) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(vehicle_with_rate("DL01LX0001", "79228162514264337593543950335")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(vehicle_with_rate("DL01LX0001", "1500.125")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(vehicle_with_rate("DL01LX0001", "99999999.99")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_total_cost_beyond_column_is_client_error() {
    let app = create_test_app();
    let (status, _) = call(
        &app,
        "POST",
        "/api/vehicles",
        Some(vehicle_with_rate("DL01LX9999", "99999999.99")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = call(
        &app,
        "POST",
        "/api/customers",
        Some(json!({
            "name": "Vikram Singh",
            "contact_info": "vikram@example.com",
            "license_number": "DL09RT4455"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // 101 días
    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "vehicle_plate": "DL01LX9999",
            "customer_id": 1,
            "start_date": "2024-01-01",
            "end_date": "2024-04-11"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "COST_OUT_OF_RANGE");

    let (_, available) = call(&app, "GET", "/api/vehicles/available", None).await;
    assert_eq!(available.as_array().unwrap().len(), 1);

    // 100 días todavía cabe
    let (status, body) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "vehicle_plate": "DL01LX9999",
            "customer_id": 1,
            "start_date": "2024-01-01",
            "end_date": "2024-04-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total_cost"], "9999999999.00");
}

#[tokio::test]
async fn test_maintenance_cost_is_validated() {
    let app = create_test_app();
    register_fleet(&app).await;

    for cost in ["-1", "10000000000"] {
        let (status, body) = call(
            &app,
            "POST",
            "/api/maintenance",
            Some(json!({
                "vehicle_plate": "MH12AB1234",
                "service_date": "2024-06-01",
                "description": "Brake Pads",
                "cost": cost
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "cost {}", cost);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (_, records) = call(&app, "GET", "/api/maintenance", None).await;
    assert_eq!(records.as_array().unwrap().len(), 0);
    let (_, dashboard) = call(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(dashboard["available_vehicles"], 1);
}

#[tokio::test]
async fn test_empty_dashboard() {
    let app = create_test_app();
    let (status, body) = call(&app, "GET", "/api/dashboard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_vehicles"], 0);
    assert_eq!(body["available_vehicles"], 0);
    assert_eq!(body["rented_vehicles"], 0);
    assert_eq!(body["maintenance_vehicles"], 0);
    assert_eq!(body["upcoming_reservations"], json!([]));
}

#[tokio::test]
async fn test_dashboard_lists_only_future_reservations() {
    let app = create_test_app();
    register_fleet(&app).await;

    call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2000-01-01", "2000-01-05")),
    )
    .await;
    let (status, _) = call(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation("2099-01-01", "2099-01-05")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = call(&app, "GET", "/api/dashboard", None).await;
    let upcoming = body["upcoming_reservations"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["start_date"], "2099-01-01T00:00:00");
    assert_eq!(body["rented_vehicles"], 1);
    assert_eq!(body["total_vehicles"], 1);
}
