// tests/common/mod.rs
#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use orders_service::config::AppConfig;
use orders_service::remote::{CommunicationFailure, DependencyStatus, RemoteUser, UserDirectory, Verification};
use orders_service::state::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// In-memory `UserDirectory` with canned answers. Unknown ids answer `NotFound`.
pub struct StubDirectory {
  users: HashMap<u64, Value>,
  failure: Option<CommunicationFailure>,
  health: DependencyStatus,
  calls: AtomicUsize,
}

impl StubDirectory {
  /// Users 1-3 as seeded by the users service, all active.
  pub fn seeded() -> Self {
    let users = [
      (1, "Juan Perez", "juan@email.com"),
      (2, "Maria Gonzalez", "maria@email.com"),
      (3, "Carlos Lopez", "carlos@email.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| (id, json!({"id": id, "name": name, "email": email, "active": true})))
    .collect();

    Self {
      users,
      failure: None,
      health: DependencyStatus::Healthy,
      calls: AtomicUsize::new(0),
    }
  }

  /// Every verification fails with `failure`; the probe reports unreachable.
  pub fn failing(failure: CommunicationFailure) -> Self {
    Self {
      failure: Some(failure),
      health: DependencyStatus::Unreachable,
      ..Self::seeded()
    }
  }

  pub fn with_user(mut self, id: u64, payload: Value) -> Self {
    self.users.insert(id, payload);
    self
  }

  pub fn with_health(mut self, health: DependencyStatus) -> Self {
    self.health = health;
    self
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl UserDirectory for StubDirectory {
  async fn verify_user(&self, user_id: u64) -> Verification {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = &self.failure {
      return Verification::Failed(failure.clone());
    }
    match self.users.get(&user_id) {
      Some(payload) => match RemoteUser::from_payload(payload.clone()) {
        Ok(user) => Verification::Confirmed(user),
        Err(reason) => Verification::Failed(CommunicationFailure::MalformedPayload(reason)),
      },
      None => Verification::NotFound,
    }
  }

  async fn probe_health(&self) -> DependencyStatus {
    self.health
  }
}

pub fn state_with(directory: Arc<StubDirectory>) -> AppState {
  AppState::with_directory(AppConfig::default(), directory).expect("seeded state")
}

pub fn empty_state_with(directory: Arc<StubDirectory>) -> AppState {
  let config = AppConfig {
    seed_data: false,
    ..AppConfig::default()
  };
  AppState::with_directory(config, directory).expect("empty state")
}

/// Orders state talking over HTTP to `base_url` with the given verification budget.
pub fn http_state(base_url: &str, verify_timeout: Duration) -> AppState {
  let config = AppConfig {
    user_service_url: base_url.to_string(),
    user_verify_timeout: verify_timeout,
    user_health_timeout: verify_timeout,
    ..AppConfig::default()
  };
  AppState::new(config).expect("http state")
}

pub fn valid_order(user_id: u64) -> Value {
  json!({"user_id": user_id, "product": "Phone", "quantity": 1, "price": 899.99})
}

/// Serves the real users service on a loopback port and returns its base URL.
pub fn spawn_users_service(state: users_service::state::AppState) -> String {
  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(state.clone()))
      .configure(users_service::web::configure_app_routes)
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .expect("bind users service");
  let addr = server.addrs()[0];
  actix_web::rt::spawn(server.run());
  format!("http://{}", addr)
}

#[derive(Debug, Clone, Copy)]
pub enum StubBehavior {
  /// Answers like a healthy users service, but only after the delay.
  Slow(Duration),
  /// Empty response with this status on every route.
  Status(u16),
  /// 200 with this body as `application/json`.
  Body(&'static str),
}

/// A misbehaving users service on a loopback port.
pub fn spawn_users_stub(behavior: StubBehavior) -> String {
  let server = HttpServer::new(move || {
    App::new().default_service(web::to(move || async move {
      match behavior {
        StubBehavior::Slow(delay) => {
          tokio::time::sleep(delay).await;
          HttpResponse::Ok().json(json!({"id": 1, "name": "Slow", "email": "slow@x.com", "active": true}))
        }
        StubBehavior::Status(code) => {
          HttpResponse::build(StatusCode::from_u16(code).expect("valid status")).finish()
        }
        StubBehavior::Body(body) => HttpResponse::Ok().content_type("application/json").body(body),
      }
    }))
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .expect("bind users stub");
  let addr = server.addrs()[0];
  actix_web::rt::spawn(server.run());
  format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
  let port = listener.local_addr().expect("local addr").port();
  drop(listener);
  format!("http://127.0.0.1:{}", port)
}

/// Builds an in-process service over `$state` with the production routes.
macro_rules! orders_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(orders_service::web::configure_app_routes),
    )
    .await
  };
}
