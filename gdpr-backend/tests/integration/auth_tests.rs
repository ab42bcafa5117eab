// tests/integration/auth_tests.rs

use axum::http::{header, StatusCode};
use gdpr_backend::config::AppConfig;
use gdpr_backend::middleware::session::HubSession;
use gdpr_backend::utils::session_token::SessionManager;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{app_helper, request, session_helper};

const PROTECTED_ROUTES: &[(&str, &str)] = &[
    ("GET", "/gdpr/"),
    ("GET", "/gdpr/consent_records/"),
    ("GET", "/gdpr/consent_records/?export=csv"),
    ("GET", "/gdpr/consent_records/add/"),
    ("POST", "/gdpr/consent_records/add/"),
    ("POST", "/gdpr/consent_records/bulk/"),
    ("GET", "/gdpr/data_requests/"),
    ("GET", "/gdpr/data_requests/add/"),
    ("POST", "/gdpr/data_requests/add/"),
    ("POST", "/gdpr/data_requests/bulk/"),
    ("GET", "/gdpr/settings/"),
    ("GET", "/gdpr/assistant/tools/"),
    ("POST", "/gdpr/assistant/tools/list_consent_records/"),
];

#[tokio::test]
async fn test_unauthenticated_requests_redirect_to_login() {
    let app = app_helper::setup_app().await;
    let record_id = Uuid::new_v4();
    let edit = format!("/gdpr/consent_records/{}/edit/", record_id);
    let delete = format!("/gdpr/data_requests/{}/delete/", record_id);

    let mut routes: Vec<(&str, &str)> = PROTECTED_ROUTES.to_vec();
    routes.push(("GET", edit.as_str()));
    routes.push(("POST", delete.as_str()));

    for (method, uri) in routes {
        let res = app
            .router
            .clone()
            .oneshot(request::anonymous(method, uri))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER, "{} {}", method, uri);
        let location = res.headers()[header::LOCATION].to_str().unwrap();
        assert!(
            location.starts_with("/accounts/login/?next="),
            "{} {} -> {}",
            method,
            uri,
            location
        );
    }
}

#[tokio::test]
async fn test_redirect_keeps_requested_path_as_next() {
    let app = app_helper::setup_app().await;

    let res = app
        .router
        .clone()
        .oneshot(request::anonymous("GET", "/gdpr/consent_records/?q=ada"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[header::LOCATION],
        "/accounts/login/?next=%2Fgdpr%2Fconsent_records%2F%3Fq%3Dada"
    );
}

#[tokio::test]
async fn test_invalid_token_redirects() {
    let app = app_helper::setup_app().await;

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/", "not-a-session-token"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_redirects() {
    let app = app_helper::setup_app().await;

    let mut config = AppConfig::for_testing().session;
    config.secret_key = "a-completely-different-secret-of-enough-length".to_string();
    let foreign = SessionManager::new(&config).unwrap();
    let token = foreign
        .issue(&HubSession {
            user_id: Uuid::new_v4(),
            hub_id: Uuid::new_v4(),
            name: "Mallory".to_string(),
            email: "mallory@example.com".to_string(),
            role: "admin".to_string(),
            permissions: vec![],
        })
        .unwrap();

    let res = app
        .router
        .clone()
        .oneshot(request::get("/gdpr/", &token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());

    let res = app
        .router
        .clone()
        .oneshot(request::get_with_cookie(
            "/gdpr/",
            &app.state.config.session.cookie_name,
            &session.token,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_requires_post() {
    let app = app_helper::setup_app().await;
    let session = session_helper::admin_session(&app.state, Uuid::new_v4());
    let uri = format!("/gdpr/consent_records/{}/delete/", Uuid::new_v4());

    let res = app
        .router
        .clone()
        .oneshot(request::get(&uri, &session.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
