#![allow(dead_code)]

// tests/common/mod.rs
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use backend::adapters::questions_sea::{self, QuestionCreate};
use backend::state::app_state::AppState;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Fresh application state over a private in-memory SQLite database with the
/// schema migrated and the six seed categories in place.
///
/// In-memory SQLite gives every connection its own database, so the pool is
/// pinned to a single connection and migrations run on that connection.
pub async fn setup_state() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&conn, None).await.expect("run migrations");

    AppState::new(conn)
}

/// Insert one question directly through the adapter, returning its id.
pub async fn seed_question(
    state: &AppState,
    question: &str,
    answer: &str,
    difficulty: i32,
    category: &str,
) -> i32 {
    let created = questions_sea::create_question(
        &state.db,
        QuestionCreate::new(question, answer, difficulty, category),
    )
    .await
    .expect("insert seed question");
    created.id
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body is JSON")
}

/// Assert the constant error body:
/// `{success: false, error: <status>, message: <canonical>}` and nothing else.
pub async fn assert_error_body<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_message: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let json = read_json(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], expected_status);
    assert_eq!(json["message"], expected_message);
    assert_eq!(
        json.as_object().expect("error body is an object").len(),
        3,
        "error body must carry exactly success, error, message"
    );
}
