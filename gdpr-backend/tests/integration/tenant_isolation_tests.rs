// tests/integration/tenant_isolation_tests.rs

//! あるハブのセッションから他ハブのレコードは見えず、変更もできない

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, session_helper, test_data};

#[tokio::test]
async fn test_list_and_dashboard_are_hub_scoped() {
    let app = app_helper::setup_app().await;
    let hub_a = Uuid::new_v4();
    let hub_b = Uuid::new_v4();
    let session_b = session_helper::admin_session(&app.state, hub_b);

    test_data::seed_consents(&app.db.connection, hub_a, 3).await;
    test_data::seed_data_request(&app.db.connection, hub_a, "Alice", "access", "pending").await;
    test_data::seed_consent(&app.db.connection, hub_b, "Bea", "bea@example.com", "Newsletter", true)
        .await;

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/consent_records/", &session_b.token))
        .await
        .unwrap();
    let body = request::body_json(res).await;
    assert_eq!(body["data"]["pagination"]["total_count"], 1);
    assert_eq!(body["data"]["items"][0]["subject_name"], "Bea");

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/", &session_b.token))
        .await
        .unwrap();
    let body = request::body_json(res).await;
    assert_eq!(body["data"]["total_consent_records"], 1);
    assert_eq!(body["data"]["total_data_requests"], 0);
}

#[tokio::test]
async fn test_foreign_records_cannot_be_edited_or_deleted() {
    let app = app_helper::setup_app().await;
    let hub_a = Uuid::new_v4();
    let session_b = session_helper::admin_session(&app.state, Uuid::new_v4());

    let consent =
        test_data::seed_consent(&app.db.connection, hub_a, "Ada", "ada@example.com", "Newsletter", true)
            .await;
    let request_a =
        test_data::seed_data_request(&app.db.connection, hub_a, "Alice", "access", "pending").await;

    let edit = format!("/gdpr/consent_records/{}/edit/", consent.id);
    let res = app
        .router
        .clone()
        .oneshot(request::get(&edit, &session_b.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .router
        .clone()
        .oneshot(request::post_form(&edit, &session_b.token, &[("subject_name", "Hijacked")]))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let delete = format!("/gdpr/data_requests/{}/delete/", request_a.id);
    let res = app
        .router
        .clone()
        .oneshot(request::post_form(&delete, &session_b.token, &[]))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let ids = format!("{},{}", consent.id, Uuid::new_v4());
    let res = app
        .router
        .clone()
        .oneshot(request::post_form(
            "/gdpr/consent_records/bulk/",
            &session_b.token,
            &[("ids", &ids), ("action", "delete")],
        ))
        .await
        .unwrap();
    let body = request::body_json(res).await;
    assert_eq!(body["data"]["affected"], 0);

    // 元のハブでは何も変わっていない
    let stored = app
        .state
        .consent_record_service
        .get(hub_a, consent.id)
        .await
        .unwrap();
    assert_eq!(stored.subject_name, "Ada");
    assert_eq!(app.state.data_request_service.count(hub_a).await.unwrap(), 1);
}

#[tokio::test]
async fn test_assistant_tools_are_hub_scoped() {
    let app = app_helper::setup_app().await;
    let hub_a = Uuid::new_v4();
    let hub_b = Uuid::new_v4();
    let session_b = session_helper::admin_session(&app.state, hub_b);

    test_data::seed_consents(&app.db.connection, hub_a, 2).await;
    test_data::seed_data_request(&app.db.connection, hub_a, "Alice", "access", "pending").await;

    for (tool, key) in [
        ("list_consent_records", "records"),
        ("list_data_requests", "requests"),
    ] {
        let uri = format!("/gdpr/assistant/tools/{}/", tool);
        let res = app
            .router
            .clone()
            .oneshot(request::post_json(&uri, &session_b.token, &json!({})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = request::body_json(res).await;
        assert!(body["data"]["result"][key].as_array().unwrap().is_empty(), "{}", tool);
    }

    // 作成はセッションのハブに入る
    let res = app
        .router
        .clone()
        .oneshot(request::post_json(
            "/gdpr/assistant/tools/create_data_request/",
            &session_b.token,
            &json!({
                "arguments": {"subject_name": "Bea", "subject_email": "bea@example.com", "request_type": "access"},
                "confirmed": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.state.data_request_service.count(hub_b).await.unwrap(), 1);
    assert_eq!(app.state.data_request_service.count(hub_a).await.unwrap(), 1);
}

#[tokio::test]
async fn test_export_is_hub_scoped() {
    let app = app_helper::setup_app().await;
    let hub_a = Uuid::new_v4();
    let session_b = session_helper::admin_session(&app.state, Uuid::new_v4());
    test_data::seed_consents(&app.db.connection, hub_a, 3).await;

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/consent_records/?export=csv", &session_b.token))
        .await
        .unwrap();
    let body = String::from_utf8(request::body_bytes(res).await).unwrap();
    assert_eq!(body.lines().count(), 1);
}
