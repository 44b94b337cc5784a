//! End-to-end API flows against the in-process router.
//!
//! Each test boots a seeded state (the demo restaurant) and drives the HTTP
//! surface exactly as the dashboard would.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use noory_server::{Config, ServerState, build_app};
use serde_json::Value;
use tower::ServiceExt;

fn demo_app() -> Router {
    let config = Config::with_overrides(0, true);
    let state = ServerState::initialize(&config);
    build_app(state)
}

async fn send(app: &Router, request: Request<Body>) -> http::Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &str) -> http::Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> http::Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn body_json(response: http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_and_seeded_floor() {
    let app = demo_app();

    let response = get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await;
    assert_eq!(health["status"], "ok");

    let response = get(&app, "/api/tables").await;
    assert_eq!(response.status(), StatusCode::OK);
    let tables = body_json(response).await;
    let tables = tables.as_array().unwrap();
    assert_eq!(tables.len(), 12);

    let table4 = tables.iter().find(|t| t["id"] == "4").unwrap();
    assert_eq!(table4["occupant"]["id"], "B1");
    let table9 = tables.iter().find(|t| t["id"] == "9").unwrap();
    assert!(table9.get("occupant").is_none());
}

#[tokio::test]
async fn drag_swap_and_unseat_flow() {
    let app = demo_app();

    // B1 sits on table 4, B2 on table 6. Dropping B2 on table 4 swaps them.
    let response = send_json(&app, "PUT", "/api/bookings/B2/table", r#"{"table":"4"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    let result = body_json(response).await;
    assert_eq!(result["action"], "swapped");
    assert_eq!(result["swappedWith"], "B1");
    assert_eq!(result["booking"]["table"], "4");
    assert!(
        result["notice"]
            .as_str()
            .unwrap()
            .starts_with("Växlade plats")
    );

    let b1 = body_json(get(&app, "/api/bookings/B1").await).await;
    assert_eq!(b1["table"], "6");

    // Dropping B2 back on the waiting list clears its table.
    let response = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/bookings/B2/table")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let result = body_json(response).await;
    assert_eq!(result["action"], "unseated");

    let waiting = body_json(get(&app, "/api/bookings/unseated").await).await;
    let ids: Vec<&str> = waiting
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"B2"));
}

#[tokio::test]
async fn seating_rejects_bad_input() {
    let app = demo_app();

    // Unknown booking → 404
    let response = send_json(&app, "PUT", "/api/bookings/nope/table", r#"{"table":"4"}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Table outside the floor → 400
    let response = send_json(&app, "PUT", "/api/bookings/B2/table", r#"{"table":"99"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Self-drop is a quiet success
    let response = send_json(&app, "PUT", "/api/bookings/B1/table", r#"{"table":"4"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    let result = body_json(response).await;
    assert_eq!(result["action"], "noop");
}

#[tokio::test]
async fn check_in_follows_the_status_machine() {
    let app = demo_app();

    let response = send_json(
        &app,
        "PATCH",
        "/api/bookings/B4/status",
        r#"{"status":"arrived"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let booking = body_json(response).await;
    assert_eq!(booking["status"], "arrived");

    // arrived → confirmed is not a legal transition
    let response = send_json(
        &app,
        "PATCH",
        "/api/bookings/B4/status",
        r#"{"status":"confirmed"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn pos_flow_feeds_the_reports() {
    let app = demo_app();

    // Open table 5
    let response = send_json(&app, "POST", "/api/orders", r#"{"table":"5"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    let order = body_json(response).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    // The same table cannot be opened twice
    let response = send_json(&app, "POST", "/api/orders", r#"{"table":"5"}"#).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Two grilled char at 295 kr
    let response = send_json(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/lines"),
        r#"{"menuItemId":"3","quantity":2}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let order = body_json(response).await;
    assert_eq!(order["total"], 590.0);

    // Settle the bill
    let response = send_json(&app, "POST", &format!("/api/orders/{order_id}/settle"), "{}").await;
    assert_eq!(response.status(), StatusCode::OK);
    let order = body_json(response).await;
    assert_eq!(order["status"], "paid");

    // Revenue shows up on the dashboard
    let overview = body_json(get(&app, "/api/reports/overview").await).await;
    assert_eq!(overview["overview"]["revenueToday"], 590.0);
    assert_eq!(overview["overview"]["ordersToday"], 1);
    let kpis = overview["kpis"].as_array().unwrap();
    assert_eq!(kpis[0]["label"], "Dagens Försäljning");

    // And the char tops the popularity list
    let top = body_json(get(&app, "/api/reports/top-sellers").await).await;
    assert_eq!(top[0]["name"], "Grillad Röding");
    assert_eq!(top[0]["sales"], 2);
}

#[tokio::test]
async fn menu_and_inventory_validation() {
    let app = demo_app();

    // Negative price → 400
    let response = send_json(
        &app,
        "POST",
        "/api/menu",
        r#"{"name":"Testrätt","category":"Varmrätt","price":-5.0,"description":""}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The seeded cellar is low on house red
    let low = body_json(get(&app, "/api/inventory/low-stock").await).await;
    let names: Vec<&str> = low
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Husets Rödvin"));

    // Unseated list and bookings list agree with the seed
    let bookings = body_json(get(&app, "/api/bookings").await).await;
    assert_eq!(bookings.as_array().unwrap().len(), 7);
}
