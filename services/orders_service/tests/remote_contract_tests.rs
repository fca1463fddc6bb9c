// tests/remote_contract_tests.rs
//
// Real HTTP between the ledger and a users service on loopback ports.
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use orders_service::remote::{CommunicationFailure, DependencyStatus, HttpUserDirectory, UserDirectory, Verification};
use serde_json::{json, Value};
use serial_test::serial;
use std::time::{Duration, Instant};

fn users_state() -> users_service::state::AppState {
  users_service::state::AppState::new(users_service::config::AppConfig::default()).expect("users state")
}

fn directory(base_url: &str, timeout: Duration) -> HttpUserDirectory {
  HttpUserDirectory::new(base_url, timeout, timeout).expect("client")
}

#[actix_web::test]
#[serial]
async fn test_live_directory_confirms_and_rejects() {
  setup_tracing();
  let base_url = spawn_users_service(users_state());
  let client = directory(&base_url, Duration::from_secs(2));

  match client.verify_user(1).await {
    Verification::Confirmed(user) => {
      assert_eq!(user.name.as_deref(), Some("Juan Perez"));
      assert!(user.active);
      assert_eq!(user.payload["created_at"], "2025-01-10");
    }
    other => panic!("expected confirmed user, got {other:?}"),
  }

  assert!(matches!(client.verify_user(999).await, Verification::NotFound));
  assert_eq!(client.probe_health().await, DependencyStatus::Healthy);
}

#[actix_web::test]
#[serial]
async fn test_closed_port_is_transport_failure() {
  setup_tracing();
  let client = directory(&closed_port_url(), Duration::from_secs(2));

  match client.verify_user(1).await {
    Verification::Failed(CommunicationFailure::Transport(_)) => {}
    other => panic!("expected transport failure, got {other:?}"),
  }
  assert_eq!(client.probe_health().await, DependencyStatus::Unreachable);
}

#[actix_web::test]
#[serial]
async fn test_slow_directory_times_out_within_budget() {
  setup_tracing();
  let base_url = spawn_users_stub(StubBehavior::Slow(Duration::from_secs(3)));
  let client = directory(&base_url, Duration::from_millis(200));

  let started = Instant::now();
  let verification = client.verify_user(1).await;
  let elapsed = started.elapsed();

  assert!(
    matches!(verification, Verification::Failed(CommunicationFailure::Timeout { timeout_ms: 200 })),
    "got {verification:?}"
  );
  assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
  assert_eq!(client.probe_health().await, DependencyStatus::Unreachable);
}

#[actix_web::test]
#[serial]
async fn test_malformed_payloads_are_communication_failures() {
  setup_tracing();
  for body in ["[1, 2, 3]", "not json", "{\"id\": 1, \"active\": \"yes\"}", ""] {
    let base_url = spawn_users_stub(StubBehavior::Body(body));
    let client = directory(&base_url, Duration::from_secs(2));

    match client.verify_user(1).await {
      Verification::Failed(CommunicationFailure::MalformedPayload(_)) => {}
      other => panic!("body {body:?}: expected malformed payload, got {other:?}"),
    }
  }
}

#[actix_web::test]
#[serial]
async fn test_server_errors_are_communication_failures() {
  setup_tracing();
  let base_url = spawn_users_stub(StubBehavior::Status(500));
  let client = directory(&base_url, Duration::from_secs(2));

  match client.verify_user(1).await {
    Verification::Failed(CommunicationFailure::UnexpectedStatus(500)) => {}
    other => panic!("expected unexpected status, got {other:?}"),
  }
  assert_eq!(client.probe_health().await, DependencyStatus::Unhealthy);
}

#[actix_web::test]
#[serial]
async fn test_new_user_can_place_an_order() {
  setup_tracing();
  let users = users_state();
  let base_url = spawn_users_service(users.clone());

  let created: Value = reqwest::Client::new()
    .post(format!("{}/users", base_url))
    .json(&json!({"name": "Ana", "email": "ana@x.com"}))
    .send()
    .await
    .expect("create user")
    .json()
    .await
    .expect("user body");
  assert_eq!(created["id"], 4);
  assert_eq!(created["active"], true);

  let orders = http_state(&base_url, Duration::from_secs(2));
  let app = orders_app!(orders.clone());

  let req = test::TestRequest::post()
    .uri("/orders")
    .set_json(json!({"user_id": 4, "product": "Phone", "quantity": 1, "price": 899.99}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["order"]["id"], 4);
  assert_eq!(body["order"]["status"], "pending");
  assert_eq!(body["user_info"]["name"], "Ana");
  assert_eq!(body["user_info"]["email"], "ana@x.com");
  assert_eq!(body["service_communication"], "success");

  // Deactivated afterwards: further orders are refused, existing ones stay readable.
  users.users.update(4, |u| u.active = false);
  let req = test::TestRequest::post().uri("/orders").set_json(valid_order(4)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["reason"], "user_inactive");
  assert_eq!(orders.orders.len(), 4);

  let req = test::TestRequest::get().uri("/orders/4/details").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["user_details"]["name"], "Ana");
  assert_eq!(body["user_details"]["active"], false);
  assert_eq!(body["communication_status"], "success");
}

#[actix_web::test]
#[serial]
async fn test_ledger_with_unreachable_directory() {
  setup_tracing();
  let state = http_state(&closed_port_url(), Duration::from_secs(1));
  let app = orders_app!(state.clone());

  let req = test::TestRequest::post().uri("/orders").set_json(valid_order(1)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["reason"], "user_service_unavailable");
  assert_eq!(body["service_communication"], "failed");
  assert_eq!(state.orders.len(), 3);

  let req = test::TestRequest::get().uri("/orders/1/details").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["order"]["id"], 1);
  assert!(body["user_details"].is_null());
  assert_eq!(body["communication_status"], "failed");

  let req = test::TestRequest::get().uri("/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["status"], "healthy");
  assert_eq!(body["dependencies"]["users-service"], "unreachable");
}
