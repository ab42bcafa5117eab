// gdpr-backend/src/api/handlers/settings_handler.rs
use crate::api::dto::settings_dto::SettingsDto;
use crate::api::AppState;
use crate::middleware::session::HubSession;
use crate::types::ApiResponse;
use axum::{routing::get, Router};

pub async fn settings_handler(_session: HubSession) -> ApiResponse<SettingsDto> {
    ApiResponse::success(SettingsDto::current())
}

pub fn settings_router() -> Router<AppState> {
    Router::new().route("/gdpr/settings/", get(settings_handler))
}
