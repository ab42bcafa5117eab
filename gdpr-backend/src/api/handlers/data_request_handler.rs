// gdpr-backend/src/api/handlers/data_request_handler.rs
use crate::api::dto::bulk_action_dto::BulkActionForm;
use crate::api::dto::data_request_dto::{DataRequestDto, DataRequestForm, DataRequestFormDto};
use crate::api::dto::{ListRefreshResponse, SavedResponse};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::uuid::RecordId;
use crate::middleware::session::HubSession;
use crate::service::export_service::ListingOutcome;
use crate::types::{ApiResponse, ListQuery};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};

pub async fn list_data_requests_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    query: ListQuery,
) -> AppResult<ListingOutcome<DataRequestDto>> {
    app_state
        .data_request_service
        .list(session.hub_id, &query)
        .await
}

pub async fn add_data_request_form_handler(
    _session: HubSession,
) -> ApiResponse<DataRequestFormDto> {
    ApiResponse::success(DataRequestFormDto::new(None))
}

pub async fn create_data_request_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    Form(form): Form<DataRequestForm>,
) -> AppResult<(StatusCode, ApiResponse<SavedResponse<DataRequestDto>>)> {
    let saved = app_state
        .data_request_service
        .create(session.hub_id, form.into_create_input())
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(saved)))
}

pub async fn edit_data_request_form_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
) -> AppResult<ApiResponse<DataRequestFormDto>> {
    let record = app_state.data_request_service.get(session.hub_id, id).await?;
    Ok(ApiResponse::success(DataRequestFormDto::new(Some(record))))
}

pub async fn update_data_request_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
    Form(form): Form<DataRequestForm>,
) -> AppResult<ApiResponse<SavedResponse<DataRequestDto>>> {
    let saved = app_state
        .data_request_service
        .update(session.hub_id, id, form.into_update_input())
        .await?;
    Ok(ApiResponse::success(saved))
}

pub async fn delete_data_request_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
) -> AppResult<ApiResponse<ListRefreshResponse<DataRequestDto>>> {
    let refreshed = app_state
        .data_request_service
        .delete(session.hub_id, id)
        .await?;
    Ok(ApiResponse::success(refreshed))
}

pub async fn bulk_data_request_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    Form(form): Form<BulkActionForm>,
) -> AppResult<ApiResponse<ListRefreshResponse<DataRequestDto>>> {
    let refreshed = app_state
        .data_request_service
        .bulk_action(session.hub_id, &form)
        .await?;
    Ok(ApiResponse::success(refreshed))
}

pub fn data_request_router() -> Router<AppState> {
    Router::new()
        .route("/gdpr/data_requests/", get(list_data_requests_handler))
        .route(
            "/gdpr/data_requests/add/",
            get(add_data_request_form_handler).post(create_data_request_handler),
        )
        .route(
            "/gdpr/data_requests/{id}/edit/",
            get(edit_data_request_form_handler).post(update_data_request_handler),
        )
        .route(
            "/gdpr/data_requests/{id}/delete/",
            post(delete_data_request_handler),
        )
        .route("/gdpr/data_requests/bulk/", post(bulk_data_request_handler))
}
