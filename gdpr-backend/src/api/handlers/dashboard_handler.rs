// gdpr-backend/src/api/handlers/dashboard_handler.rs
use crate::api::dto::dashboard_dto::DashboardDto;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::session::HubSession;
use crate::types::ApiResponse;
use axum::{extract::State, routing::get, Router};

/// 自テナントの件数サマリー
pub async fn dashboard_handler(
    State(app_state): State<AppState>,
    session: HubSession,
) -> AppResult<ApiResponse<DashboardDto>> {
    let summary = app_state.dashboard_service.summary(session.hub_id).await?;
    Ok(ApiResponse::success(summary))
}

pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/gdpr/", get(dashboard_handler))
}
