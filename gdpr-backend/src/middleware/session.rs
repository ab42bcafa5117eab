// gdpr-backend/src/middleware/session.rs

use crate::api::AppState;
use crate::domain::permission::{check_permission, PermissionResult};
use crate::error::AppError;
use crate::log_with_context;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use uuid::Uuid;

/// 認証済みのハブセッション
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubSession {
    pub user_id: Uuid,
    pub hub_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl HubSession {
    pub fn check_permission(&self, required: &str) -> PermissionResult {
        check_permission(&self.role, &self.permissions, required)
    }

    pub fn has_permission(&self, required: &str) -> bool {
        self.check_permission(required).is_allowed()
    }

    /// 権限がなければ Forbidden
    pub fn require_permission(&self, required: &str) -> Result<(), AppError> {
        match self.check_permission(required) {
            PermissionResult::Allowed => Ok(()),
            PermissionResult::Denied { reason } => Err(AppError::Forbidden(reason)),
        }
    }
}

impl<S> FromRequestParts<S> for HubSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<HubSession>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Session required".to_string()))
    }
}

/// ハブセッション必須ミドルウェア。失敗時はログイン画面へ 303 リダイレクト
pub async fn require_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    cookie_jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = extract_token(&headers, &cookie_jar, &state.config.session.cookie_name);

    let session = match token.map(|t| state.session_manager.verify(&t)) {
        Some(Ok(session)) => session,
        Some(Err(e)) => {
            log_with_context!(
                tracing::Level::WARN,
                "Rejected hub session",
                "path" => request.uri().path(),
                "error" => e.to_string()
            );
            return login_redirect(&state.config.session.login_url, &request);
        }
        None => return login_redirect(&state.config.session.login_url, &request),
    };

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;
    // ロギングミドルウェアが hub_id を参照する
    response.extensions_mut().insert(session);
    response
}

fn login_redirect(login_url: &str, request: &Request) -> Response {
    let next = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = format!("{}?next={}", login_url, urlencoding::encode(next));
    Redirect::to(&location).into_response()
}

/// Authorization ヘッダー優先、なければ Cookie
fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let cookie_token = cookie_jar
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|s| !s.is_empty());

    auth_header.or(cookie_token)
}
