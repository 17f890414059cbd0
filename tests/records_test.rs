//! Integration tests for academics, value and event records.

mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use common::{TestDb, api, seed_student, seed_teacher, session_for};

#[actix_web::test]
async fn academics_saves_overwrite_the_single_row() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie.clone())
            .set_json(json!({ "percentage": 85 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Academics saved successfully");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["academics"]["percentage"].as_f64(), Some(85.0));
    let row_id = body["academics"]["id"].as_i64().unwrap();

    // The second save updates in place instead of adding a row
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie.clone())
            .set_json(json!({ "percentage": 92.5 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["academics"]["percentage"].as_f64(), Some(92.5));
    assert_eq!(body["academics"]["id"].as_i64(), Some(row_id));

    let all = db.storage.list_all_academics().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[actix_web::test]
async fn academics_body_is_checked_before_the_student_lookup() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie.clone())
            .set_json(json!({ "percentage": 150 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Percentage must be between 0 and 100");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/academics"))
            .cookie(cookie.clone())
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Out-of-range body on a missing student still reads as a bad request
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/students/9999/academics")
            .cookie(cookie.clone())
            .set_json(json!({ "percentage": 150 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A valid body on a missing student is the 404
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/students/9999/academics")
            .cookie(cookie)
            .set_json(json!({ "percentage": 85 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Student not found");
}

#[actix_web::test]
async fn value_scores_keep_one_row_per_type() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    for score in [8, 10] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/students/{student_id}/values"))
                .cookie(cookie.clone())
                .set_json(json!({
                    "value_type": "Leadership and Responsibility",
                    "score": score,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Value saved successfully");
    }

    // Two saves of the same type collapse into one row with the last score
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/values"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let values = body["values"].as_array().unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["score"].as_i64(), Some(10));
    let leadership_id = values[0]["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/values"))
            .cookie(cookie.clone())
            .set_json(json!({ "value_type": "Bhavan's Values", "score": 9 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/values"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["values"].as_array().unwrap().len(), 2);

    // Update and delete address the row id
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/values/{leadership_id}"))
            .cookie(cookie.clone())
            .set_json(json!({ "score": 3 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Value updated successfully");

    let row = db
        .storage
        .get_value_by_id(leadership_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.score, 3);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/values/{leadership_id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Value deleted successfully");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/values"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["values"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn value_scores_outside_one_to_ten_are_rejected() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    for score in [0, 11] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/students/{student_id}/values"))
                .cookie(cookie.clone())
                .set_json(json!({
                    "value_type": "Leadership and Responsibility",
                    "score": score,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "score {score}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Score must be between 1 and 10");
    }

    // Value types outside the fixed pair never deserialize
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/values"))
            .cookie(cookie)
            .set_json(json!({ "value_type": "Punctuality", "score": 5 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request payload"),
        "unexpected error: {}",
        body["error"]
    );
}

#[actix_web::test]
async fn event_points_always_come_from_the_table() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    // Client supplied points are discarded; State Winner in a group is 17
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/events"))
            .cookie(cookie.clone())
            .set_json(json!({
                "event_category": "Sports",
                "achievement_level": "State Winner",
                "is_group": true,
                "remark": "Relay team",
                "points": 999,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Event added successfully");
    let event_id = body["eventId"].as_i64().expect("eventId in response");

    let event = db.storage.get_event_by_id(event_id).await.unwrap().unwrap();
    assert_eq!(event.points, 17);

    // Events accumulate instead of overwriting
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/events"))
            .cookie(cookie.clone())
            .set_json(json!({
                "event_category": "Literary",
                "achievement_level": "National Winner",
                "is_group": false,
                "remark": "Essay prize",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/events"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|e| e["points"].as_i64() == Some(30)));

    // Editing the level reprices the event
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/events/{event_id}"))
            .cookie(cookie.clone())
            .set_json(json!({
                "event_category": "Sports",
                "achievement_level": "District Participation",
                "is_group": false,
                "remark": "Relay team",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Event updated successfully");

    let event = db.storage.get_event_by_id(event_id).await.unwrap().unwrap();
    assert_eq!(event.points, 10);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/events/{event_id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Event deleted successfully");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/students/{student_id}/events"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["events"].as_array().unwrap().len(), 1);

    // Blank remarks never make it in
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/events"))
            .cookie(cookie)
            .set_json(json!({
                "event_category": "Sports",
                "achievement_level": "State Winner",
                "is_group": false,
                "remark": "",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Remark is required");
}

#[actix_web::test]
async fn unknown_record_ids_read_as_not_found() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let cookie = session_for(&teacher);
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/academics/424242")
            .cookie(cookie.clone())
            .set_json(json!({ "percentage": 50 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Academics record not found");

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/values/424242")
            .cookie(cookie.clone())
            .set_json(json!({ "score": 5 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Value record not found");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/events/424242")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Event not found");
}

#[actix_web::test]
async fn record_endpoints_require_a_session() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let student_id = seed_student(&db.storage, teacher.id, "Ann").await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/students/{student_id}/academics"))
            .set_json(json!({ "percentage": 85 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
}
