// tests/integration/dashboard_tests.rs

use axum::http::StatusCode;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, session_helper, test_data};

#[tokio::test]
async fn test_dashboard_counts_visible_records() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    let db = &app.db.connection;

    let consents = test_data::seed_consents(db, hub_id, 3).await;
    test_data::seed_data_request(db, hub_id, "Grace Hopper", "access", "pending").await;
    test_data::seed_data_request(db, hub_id, "Alan Turing", "erasure", "pending").await;

    // 他テナントと削除済みは数えない
    test_data::seed_consents(db, Uuid::new_v4(), 5).await;
    app.state
        .consent_record_service
        .delete(hub_id, consents[0].id)
        .await
        .unwrap();

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/", &session.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = request::body_json(res).await;
    assert!(body["success"].as_bool().unwrap());
    assert_eq!(body["data"]["total_consent_records"], 2);
    assert_eq!(body["data"]["total_data_requests"], 2);
}

#[tokio::test]
async fn test_dashboard_for_empty_hub() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/", &session.token))
        .await
        .unwrap();

    let body = request::body_json(res).await;
    assert_eq!(body["data"]["total_consent_records"], 0);
    assert_eq!(body["data"]["total_data_requests"], 0);
}
