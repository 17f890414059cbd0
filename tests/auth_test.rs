//! Integration tests for registration, login and session handling.
//!
//! Register and login sit behind per-IP rate limits, so every request
//! that hits them carries an explicit peer address; tests that need
//! several attempts spread them across addresses.

mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use common::{PASSWORD, TestDb, api, seed_teacher, session_cookie, session_for};

#[actix_web::test]
async fn register_creates_a_teacher_account_with_a_session() {
    let db = TestDb::new().await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr("10.1.0.1:40000".parse().unwrap())
            .set_json(json!({
                "email": "priya@school.com",
                "password": PASSWORD,
                "name": "Priya Kumar",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let cookie = session_cookie(&resp);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
    let user_id = body["userId"].as_i64().expect("userId in response");
    assert!(user_id > 0);

    // The cookie from the response opens a session
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "priya@school.com");
    assert_eq!(body["user"]["role"], "teacher");
    assert!(body["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn register_rejects_incomplete_or_duplicate_signups() {
    let db = TestDb::new().await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    // Missing password
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr("10.1.1.1:40000".parse().unwrap())
            .set_json(json!({ "email": "a@school.com", "name": "A" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email, password, and name are required");

    // Empty string counts as missing
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr("10.1.1.2:40000".parse().unwrap())
            .set_json(json!({ "email": "a@school.com", "password": "", "name": "A" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Malformed email
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr("10.1.1.3:40000".parse().unwrap())
            .set_json(json!({ "email": "not-an-email", "password": PASSWORD, "name": "A" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email format is invalid");

    // Taken email
    seed_teacher(&db.storage, "taken@school.com", "First").await;
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr("10.1.1.4:40000".parse().unwrap())
            .set_json(json!({ "email": "taken@school.com", "password": PASSWORD, "name": "Second" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User with this email already exists");
}

#[actix_web::test]
async fn login_checks_credentials() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;
    let peer = "10.1.2.1:40000".parse().unwrap();

    // Wrong password and unknown email read the same to the caller
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .peer_addr(peer)
            .set_json(json!({ "email": "priya@school.com", "password": "wrong" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .peer_addr(peer)
            .set_json(json!({ "email": "nobody@school.com", "password": PASSWORD }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");

    // Missing fields are a 400, not a 401
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .peer_addr(peer)
            .set_json(json!({ "email": "priya@school.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email and password are required");

    // Correct credentials
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .peer_addr(peer)
            .set_json(json!({ "email": "priya@school.com", "password": PASSWORD }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"].as_i64(), Some(teacher.id));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn logout_expires_the_session_cookie() {
    let db = TestDb::new().await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/auth/logout").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    assert_eq!(cookie.value(), "");
    assert_eq!(
        cookie.max_age(),
        Some(actix_web::cookie::time::Duration::seconds(0))
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout successful");
}

#[actix_web::test]
async fn me_rejects_missing_garbage_or_orphaned_sessions() {
    let db = TestDb::new().await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    // No cookie at all
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/auth/me").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");

    // Unsigned garbage
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(actix_web::cookie::Cookie::new("session", "garbage"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Valid token for an account that no longer exists
    let teacher = seed_teacher(&db.storage, "gone@school.com", "Gone").await;
    let cookie = session_for(&teacher);
    db.storage.delete_user(teacher.id).await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn repeated_registrations_from_one_address_get_throttled() {
    let db = TestDb::new().await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;
    let peer = "10.1.3.1:40000".parse().unwrap();

    for i in 0..3 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .peer_addr(peer)
                .set_json(json!({
                    "email": format!("bulk{i}@school.com"),
                    "password": PASSWORD,
                    "name": format!("Bulk {i}"),
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED, "attempt {i}");
    }

    // Fourth attempt inside the window is turned away
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .peer_addr(peer)
            .set_json(json!({
                "email": "bulk3@school.com",
                "password": PASSWORD,
                "name": "Bulk 3",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key("Retry-After"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Too many requests. Please try again later");
}
