//! Shared fixtures for the integration tests.
//!
//! Every test builds its own [`TestDb`] so suites can run in parallel
//! without stepping on each other's rows.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;
use serde_json::json;
use tempfile::TempDir;

use meritbook::models::users::entities::{User, UserRole};
use meritbook::models::users::requests::CreateUserRecord;
use meritbook::routes;
use meritbook::storage::Storage;
use meritbook::storage::sea_orm_storage::SeaOrmStorage;
use meritbook::utils::password::hash_password;
use meritbook::utils::session::SessionUtils;
use meritbook::utils::{json_error_handler, query_error_handler};

/// Password given to every seeded account.
pub const PASSWORD: &str = "password123";

/// Isolated storage backed by a throwaway SQLite file.
///
/// The `TempDir` guard has to stay alive as long as the storage; dropping
/// it deletes the database file out from under the pool.
pub struct TestDb {
    pub storage: Arc<dyn Storage>,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir.path().join("meritbook-test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let storage = SeaOrmStorage::connect(&url, 4, 5)
            .await
            .expect("connect test storage");

        Self {
            storage: Arc::new(storage),
            _dir: dir,
        }
    }
}

/// The full API surface wired the same way `main` wires it, minus the
/// outer CORS and compression layers.
pub fn api(storage: Arc<dyn Storage>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(storage));
        routes::configure_auth_routes(cfg);
        routes::configure_student_routes(cfg);
        routes::configure_academics_routes(cfg);
        routes::configure_values_routes(cfg);
        routes::configure_events_routes(cfg);
        routes::configure_admin_routes(cfg);
    }
}

pub async fn seed_teacher(storage: &Arc<dyn Storage>, email: &str, name: &str) -> User {
    let record = CreateUserRecord {
        email: email.to_string(),
        password_hash: hash_password(PASSWORD).expect("hash password"),
        name: name.to_string(),
        role: UserRole::Teacher,
    };
    storage.create_user(record).await.expect("create teacher")
}

pub async fn seed_admin(storage: &Arc<dyn Storage>) -> User {
    let record = CreateUserRecord {
        email: "admin@school.com".to_string(),
        password_hash: hash_password(PASSWORD).expect("hash password"),
        name: "Administrator".to_string(),
        role: UserRole::Admin,
    };
    storage.create_user(record).await.expect("create admin")
}

/// Bare student row with no academics, values or events.
pub async fn seed_student(storage: &Arc<dyn Storage>, teacher_id: i64, name: &str) -> i64 {
    storage
        .create_student_with_records(teacher_id, name, None, &[], &[])
        .await
        .expect("create student")
}

/// Session cookie minted directly, skipping the login endpoint.
pub fn session_for(user: &User) -> Cookie<'static> {
    let token = SessionUtils::issue_token(user.id).expect("issue session token");
    SessionUtils::create_session_cookie(&token)
}

/// The `session` cookie set by a register or login response.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie in response")
        .into_owned()
}

/// Valid composite create payload with both value scores and no events.
pub fn student_payload(name: &str, percentage: f64) -> serde_json::Value {
    json!({
        "name": name,
        "academics": { "percentage": percentage },
        "values": [
            { "value_type": "Leadership and Responsibility", "score": 8 },
            { "value_type": "Bhavan's Values", "score": 9 },
        ],
        "events": [],
    })
}
