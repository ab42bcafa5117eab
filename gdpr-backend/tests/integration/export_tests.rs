// tests/integration/export_tests.rs

use axum::http::{header, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, session_helper, test_data};

fn header_value(res: &axum::http::Response<axum::body::Body>, name: header::HeaderName) -> String {
    res.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_csv_export_contains_every_matching_row() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    test_data::seed_consents(&app.db.connection, hub_id, 15).await;

    // 1ページ (10件) を超えても全件出力
    let res = app
        .router
        .clone()
        .oneshot(request::get(
            "/gdpr/consent_records/?export=csv&sort=subject_name&page=2",
            &session.token,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_value(&res, header::CONTENT_TYPE), "text/csv; charset=utf-8");
    assert_eq!(
        header_value(&res, header::CONTENT_DISPOSITION),
        "attachment; filename=\"consent_records.csv\""
    );

    let body = String::from_utf8(request::body_bytes(res).await).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines[0],
        "Consented,Subject Name,Subject Email,Purpose,Consent Date,Withdrawal Date"
    );
    assert_eq!(lines.len(), 16);
    assert!(lines[1].starts_with("No,Subject 01,subject01@example.com,Newsletter,,"));
    assert!(lines[2].starts_with("Yes,Subject 02,subject02@example.com,Newsletter,"));
}

#[tokio::test]
async fn test_csv_export_applies_search_and_skips_deleted() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    let db = &app.db.connection;

    test_data::seed_data_request(db, hub_id, "Alice", "access", "pending").await;
    test_data::seed_data_request(db, hub_id, "Bob", "erasure", "pending").await;
    test_data::seed_data_request(db, hub_id, "Carol", "access", "completed").await;
    let deleted = test_data::seed_data_request(db, hub_id, "Dave", "access", "pending").await;
    app.state
        .data_request_service
        .delete(hub_id, deleted.id)
        .await
        .unwrap();

    let res = app
        .router
        .clone()
        .oneshot(request::get(
            "/gdpr/data_requests/?export=csv&q=pending&sort=subject_name",
            &session.token,
        ))
        .await
        .unwrap();

    assert_eq!(
        header_value(&res, header::CONTENT_DISPOSITION),
        "attachment; filename=\"data_requests.csv\""
    );
    let body = String::from_utf8(request::body_bytes(res).await).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Request Type,Status,Subject Name,Subject Email,Completed At,Notes",
            "access,pending,Alice,alice@example.com,,",
            "erasure,pending,Bob,bob@example.com,,",
        ]
    );
}

#[tokio::test]
async fn test_excel_export_returns_workbook() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    test_data::seed_data_request(&app.db.connection, hub_id, "Alice", "access", "pending").await;

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/data_requests/?export=excel", &session.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        header_value(&res, header::CONTENT_TYPE),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        header_value(&res, header::CONTENT_DISPOSITION),
        "attachment; filename=\"data_requests.xlsx\""
    );

    // xlsx は zip コンテナ
    let bytes = request::body_bytes(res).await;
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_unknown_export_format_renders_page() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    test_data::seed_consents(&app.db.connection, hub_id, 2).await;

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/consent_records/?export=pdf", &session.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(header_value(&res, header::CONTENT_TYPE).starts_with("application/json"));
    let body = request::body_json(res).await;
    assert_eq!(body["data"]["pagination"]["total_count"], 2);
}
