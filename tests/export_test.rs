//! Integration tests for the whole-school CSV export.

mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use meritbook::models::events::entities::{AchievementLevel, EventCategory};
use meritbook::models::events::requests::NewEvent;

use common::{TestDb, api, seed_admin, seed_student, seed_teacher, session_for};

const HEADER_LINE: &str = "Student ID,Student Name,Teacher Name,Teacher Email,\
Academics Percentage,Leadership Score,Bhavan's Values Score,Total Events,Total Points,Events Details";

#[actix_web::test]
async fn export_aggregates_every_student_into_one_row() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let admin = seed_admin(&db.storage).await;
    let teacher_cookie = session_for(&teacher);
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    // Ann has the full record set: 85%, both values, two awards worth 15
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/students")
            .cookie(teacher_cookie)
            .set_json(json!({
                "name": "Ann",
                "academics": { "percentage": 85 },
                "values": [
                    { "value_type": "Leadership and Responsibility", "score": 8 },
                    { "value_type": "Bhavan's Values", "score": 9 },
                ],
                "events": [
                    {
                        "event_category": "Sports",
                        "achievement_level": "District Participation",
                        "is_group": false,
                        "remark": "Zonal meet",
                    },
                    {
                        "event_category": "Literary",
                        "achievement_level": "Interschool Ekm District Participation",
                        "is_group": false,
                        "remark": "Quiz club",
                    },
                ],
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let ann_id = body["studentId"].as_i64().unwrap();

    // Rohan has nothing recorded yet
    seed_student(&db.storage, teacher.id, "Rohan").await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/admin/export")
            .cookie(session_for(&admin))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"students-export.csv\""
    );

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert_eq!(text.lines().next(), Some(HEADER_LINE));

    let mut reader = csv::Reader::from_reader(body.as_ref());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);

    let ann = records
        .iter()
        .find(|r| &r[1] == "Ann")
        .expect("Ann in export");
    assert_eq!(&ann[0], ann_id.to_string().as_str());
    assert_eq!(&ann[2], "Priya Kumar");
    assert_eq!(&ann[3], "priya@school.com");
    // Integral percentages print without a trailing .0
    assert_eq!(&ann[4], "85");
    assert_eq!(&ann[5], "8");
    assert_eq!(&ann[6], "9");
    assert_eq!(&ann[7], "2");
    assert_eq!(&ann[8], "15");
    let details = &ann[9];
    assert_eq!(details.split("; ").count(), 2);
    assert!(details.contains("Sports - District Participation (Single) - 10pts - Zonal meet"));
    assert!(details.contains(
        "Literary - Interschool Ekm District Participation (Single) - 5pts - Quiz club"
    ));

    // Recordless students export with blanks and zero totals
    let rohan = records
        .iter()
        .find(|r| &r[1] == "Rohan")
        .expect("Rohan in export");
    assert_eq!(&rohan[4], "");
    assert_eq!(&rohan[5], "");
    assert_eq!(&rohan[6], "");
    assert_eq!(&rohan[7], "0");
    assert_eq!(&rohan[8], "0");
    assert_eq!(&rohan[9], "");
}

#[actix_web::test]
async fn export_quotes_commas_and_doubles_embedded_quotes() {
    let db = TestDb::new().await;
    let teacher = seed_teacher(&db.storage, "priya@school.com", "Priya Kumar").await;
    let admin = seed_admin(&db.storage).await;
    let student_id = seed_student(&db.storage, teacher.id, "Mol, \"Kutty\"").await;
    db.storage.upsert_academics(student_id, 92.5).await.unwrap();
    db.storage
        .create_event(
            student_id,
            &NewEvent {
                event_category: EventCategory::Arts,
                achievement_level: AchievementLevel::MayookhamWinners,
                is_group: false,
                points: 3,
                remark: "Gold, twice".to_string(),
            },
        )
        .await
        .unwrap();
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/admin/export")
            .cookie(session_for(&admin))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();

    // RFC 4180: the comma forces quoting, inner quotes are doubled
    assert!(text.contains("\"Mol, \"\"Kutty\"\"\""), "raw: {text}");

    let mut reader = csv::Reader::from_reader(body.as_ref());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[1], "Mol, \"Kutty\"");
    // Fractional percentages keep their decimals
    assert_eq!(&record[4], "92.5");
    assert_eq!(
        &record[9],
        "Arts - Mayookham Winners (Single) - 3pts - Gold, twice"
    );
}

#[actix_web::test]
async fn export_of_an_empty_school_is_just_the_header() {
    let db = TestDb::new().await;
    let admin = seed_admin(&db.storage).await;
    let app = test::init_service(App::new().configure(api(db.storage.clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/admin/export")
            .cookie(session_for(&admin))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert_eq!(text.trim_end(), HEADER_LINE);
}
