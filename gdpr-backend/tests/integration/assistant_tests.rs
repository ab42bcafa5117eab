// tests/integration/assistant_tests.rs

use std::time::Duration;

use axum::http::StatusCode;
use gdpr_backend::domain::permission::{ADD_DATA_REQUEST, VIEW_CONSENT_RECORD, VIEW_DATA_REQUEST};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, session_helper, test_data};

async fn invoke(
    app: &app_helper::TestApp,
    token: &str,
    tool: &str,
    body: Value,
) -> (StatusCode, Value) {
    let uri = format!("/gdpr/assistant/tools/{}/", tool);
    let res = app
        .router
        .clone()
        .oneshot(request::post_json(&uri, token, &body))
        .await
        .unwrap();
    let status = res.status();
    (status, request::body_json(res).await)
}

// --- ツール定義 ---

#[tokio::test]
async fn test_admin_sees_every_tool() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/assistant/tools/", &session.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = request::body_json(res).await;
    let tools = body["data"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["list_consent_records", "list_data_requests", "create_data_request"]
    );

    let create = &tools[2];
    assert_eq!(create["module_id"], "gdpr");
    assert_eq!(create["required_permission"], ADD_DATA_REQUEST);
    assert_eq!(create["requires_confirmation"], true);
    assert_eq!(create["parameters"]["additionalProperties"], false);
    assert_eq!(
        create["parameters"]["required"],
        json!(["subject_name", "subject_email", "request_type"])
    );
}

#[tokio::test]
async fn test_tool_definitions_follow_permissions() {
    let app = app_helper::setup_app().await;
    let session =
        session_helper::staff_session(&app.state, Uuid::new_v4(), &[VIEW_DATA_REQUEST]);

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/assistant/tools/", &session.token))
        .await
        .unwrap();

    let body = request::body_json(res).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["list_data_requests"]);
}

// --- 実行時の検査 ---

#[tokio::test]
async fn test_missing_permission_is_forbidden() {
    let app = app_helper::setup_app().await;
    let session =
        session_helper::staff_session(&app.state, Uuid::new_v4(), &[VIEW_DATA_REQUEST]);

    let (status, body) = invoke(&app, &session.token, "list_consent_records", json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error_type"], "forbidden");

    // 権限チェックは確認より先
    let (status, _) = invoke(
        &app,
        &session.token,
        "create_data_request",
        json!({"arguments": {"subject_name": "A", "subject_email": "a@example.com", "request_type": "access"}}),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());

    let (status, body) = invoke(&app, &session.token, "drop_everything", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_create_data_request_requires_confirmation() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::staff_session(
        &app.state,
        hub_id,
        &[ADD_DATA_REQUEST, VIEW_DATA_REQUEST],
    );
    let arguments = json!({
        "subject_name": "Grace Hopper",
        "subject_email": "grace@example.com",
        "request_type": "erasure"
    });

    let (status, body) = invoke(
        &app,
        &session.token,
        "create_data_request",
        json!({ "arguments": arguments }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "confirmation_required");
    assert_eq!(app.state.data_request_service.count(hub_id).await.unwrap(), 0);

    let (status, body) = invoke(
        &app,
        &session.token,
        "create_data_request",
        json!({ "arguments": arguments, "confirmed": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tool"], "create_data_request");
    assert_eq!(body["data"]["result"]["created"], true);

    let id: Uuid = body["data"]["result"]["id"].as_str().unwrap().parse().unwrap();
    let created = app.state.data_request_service.get(hub_id, id).await.unwrap();
    assert_eq!(created.status, "pending");
    assert_eq!(created.notes, "");
    assert_eq!(created.request_type, "erasure");
}

#[tokio::test]
async fn test_invalid_arguments_are_rejected() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());

    let cases = [
        ("list_consent_records", json!({"arguments": {"owner": "me"}})),
        ("list_consent_records", json!({"arguments": {"limit": "ten"}})),
        ("list_data_requests", json!({"arguments": ["access"]})),
        (
            "create_data_request",
            json!({"arguments": {"subject_name": "No Email", "request_type": "access"}, "confirmed": true}),
        ),
    ];

    for (tool, body) in cases {
        let (status, response) = invoke(&app, &session.token, tool, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", tool, body);
        assert_eq!(response["error_type"], "bad_request");
    }
}

// --- 一覧ツール ---

#[tokio::test]
async fn test_list_consent_records_filters_and_limit() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::staff_session(&app.state, hub_id, &[VIEW_CONSENT_RECORD]);
    let db = &app.db.connection;

    test_data::seed_consent(db, hub_id, "Ada", "ada@example.com", "Newsletter", true).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    test_data::seed_consent(db, hub_id, "Bob", "bob@example.com", "Weekly newsletter", false).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    test_data::seed_consent(db, hub_id, "Carol", "carol@example.com", "Analytics", true).await;
    let deleted =
        test_data::seed_consent(db, hub_id, "Dave", "dave@example.com", "Newsletter", true).await;
    app.state
        .consent_record_service
        .delete(hub_id, deleted.id)
        .await
        .unwrap();

    // 新しい順、削除済みは除外
    let (status, body) = invoke(&app, &session.token, "list_consent_records", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let records = body["data"]["result"]["records"].as_array().unwrap();
    let names: Vec<&str> = records
        .iter()
        .map(|r| r["subject_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Ada"]);
    assert!(records[0]["consent_date"].is_string());
    assert!(records[1]["consent_date"].is_null());

    let (_, body) = invoke(
        &app,
        &session.token,
        "list_consent_records",
        json!({"arguments": {"purpose": "NEWSLETTER"}}),
    )
    .await;
    assert_eq!(body["data"]["result"]["records"].as_array().unwrap().len(), 2);

    let (_, body) = invoke(
        &app,
        &session.token,
        "list_consent_records",
        json!({"arguments": {"purpose": "newsletter", "consented": true}}),
    )
    .await;
    let records = body["data"]["result"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["subject_name"], "Ada");

    let (_, body) = invoke(
        &app,
        &session.token,
        "list_consent_records",
        json!({"arguments": {"limit": 1}}),
    )
    .await;
    let records = body["data"]["result"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["subject_name"], "Carol");
}

#[tokio::test]
async fn test_list_consent_records_default_limit() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    test_data::seed_consents(&app.db.connection, hub_id, 25).await;

    let (_, body) = invoke(&app, &session.token, "list_consent_records", json!({})).await;
    assert_eq!(body["data"]["result"]["records"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_list_consent_records_limit_is_capped() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::admin_session(&app.state, hub_id);
    test_data::seed_consents(&app.db.connection, hub_id, 105).await;

    let (status, body) = invoke(
        &app,
        &session.token,
        "list_consent_records",
        json!({"arguments": {"limit": u64::MAX}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["result"]["records"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_list_data_requests_exact_filters() {
    let app = app_helper::setup_app().await;
    let hub_id = Uuid::new_v4();
    let session = session_helper::staff_session(&app.state, hub_id, &[VIEW_DATA_REQUEST]);
    let db = &app.db.connection;

    test_data::seed_data_request(db, hub_id, "Alice", "access", "pending").await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    test_data::seed_data_request(db, hub_id, "Bob", "erasure", "pending").await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    test_data::seed_data_request(db, hub_id, "Carol", "access", "completed").await;

    let (status, body) = invoke(&app, &session.token, "list_data_requests", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]["result"]["requests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["subject_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

    let (_, body) = invoke(
        &app,
        &session.token,
        "list_data_requests",
        json!({"arguments": {"request_type": "access", "status": "pending"}}),
    )
    .await;
    let requests = body["data"]["result"]["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["subject_name"], "Alice");
    assert_eq!(requests[0]["request_type"], "access");
    assert!(requests[0]["created_at"].is_string());

    // 完全一致なので部分文字列では当たらない
    let (_, body) = invoke(
        &app,
        &session.token,
        "list_data_requests",
        json!({"arguments": {"status": "pend"}}),
    )
    .await;
    assert!(body["data"]["result"]["requests"].as_array().unwrap().is_empty());
}
