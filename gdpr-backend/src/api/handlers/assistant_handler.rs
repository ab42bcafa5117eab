// gdpr-backend/src/api/handlers/assistant_handler.rs
use crate::api::dto::assistant_dto::{
    ToolDefinitionDto, ToolInvocationRequest, ToolInvocationResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::session::HubSession;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, State},
    routing::{get, post},
    Router,
};

/// 呼び出し元が使えるツールの定義
pub async fn list_tools_handler(
    State(app_state): State<AppState>,
    session: HubSession,
) -> ApiResponse<Vec<ToolDefinitionDto>> {
    ApiResponse::success(app_state.tool_registry.definitions_for(&session))
}

pub async fn invoke_tool_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    session: HubSession,
    Json(payload): Json<ToolInvocationRequest>,
) -> AppResult<ApiResponse<ToolInvocationResponse>> {
    let result = app_state
        .tool_registry
        .invoke(&name, payload.arguments, payload.confirmed, &session)
        .await?;

    Ok(ApiResponse::success(ToolInvocationResponse { tool: name, result }))
}

pub fn assistant_router() -> Router<AppState> {
    Router::new()
        .route("/gdpr/assistant/tools/", get(list_tools_handler))
        .route("/gdpr/assistant/tools/{name}/", post(invoke_tool_handler))
}
