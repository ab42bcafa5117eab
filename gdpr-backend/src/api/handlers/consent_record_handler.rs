// gdpr-backend/src/api/handlers/consent_record_handler.rs
use crate::api::dto::bulk_action_dto::BulkActionForm;
use crate::api::dto::consent_record_dto::{
    ConsentRecordDto, ConsentRecordForm, ConsentRecordFormDto, ConsentRecordInput,
};
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

/// 一覧 (検索・ソート・ページング) または export 指定時はファイル
pub async fn list_consent_records_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    query: ListQuery,
) -> AppResult<ListingOutcome<ConsentRecordDto>> {
    app_state
        .consent_record_service
        .list(session.hub_id, &query)
        .await
}

pub async fn add_consent_record_form_handler(
    _session: HubSession,
) -> ApiResponse<ConsentRecordFormDto> {
    ApiResponse::success(ConsentRecordFormDto {
        is_edit: false,
        record: None,
    })
}

pub async fn create_consent_record_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    Form(form): Form<ConsentRecordForm>,
) -> AppResult<(StatusCode, ApiResponse<SavedResponse<ConsentRecordDto>>)> {
    let saved = app_state
        .consent_record_service
        .create(session.hub_id, ConsentRecordInput::from(form))
        .await?;
    Ok((StatusCode::CREATED, ApiResponse::success(saved)))
}

pub async fn edit_consent_record_form_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
) -> AppResult<ApiResponse<ConsentRecordFormDto>> {
    let record = app_state
        .consent_record_service
        .get(session.hub_id, id)
        .await?;
    Ok(ApiResponse::success(ConsentRecordFormDto {
        is_edit: true,
        record: Some(record),
    }))
}

pub async fn update_consent_record_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
    Form(form): Form<ConsentRecordForm>,
) -> AppResult<ApiResponse<SavedResponse<ConsentRecordDto>>> {
    let saved = app_state
        .consent_record_service
        .update(session.hub_id, id, ConsentRecordInput::from(form))
        .await?;
    Ok(ApiResponse::success(saved))
}

pub async fn delete_consent_record_handler(
    State(app_state): State<AppState>,
    RecordId(id): RecordId,
    session: HubSession,
) -> AppResult<ApiResponse<ListRefreshResponse<ConsentRecordDto>>> {
    let refreshed = app_state
        .consent_record_service
        .delete(session.hub_id, id)
        .await?;
    Ok(ApiResponse::success(refreshed))
}

pub async fn bulk_consent_record_handler(
    State(app_state): State<AppState>,
    session: HubSession,
    Form(form): Form<BulkActionForm>,
) -> AppResult<ApiResponse<ListRefreshResponse<ConsentRecordDto>>> {
    let refreshed = app_state
        .consent_record_service
        .bulk_action(session.hub_id, &form)
        .await?;
    Ok(ApiResponse::success(refreshed))
}

pub fn consent_record_router() -> Router<AppState> {
    Router::new()
        .route("/gdpr/consent_records/", get(list_consent_records_handler))
        .route(
            "/gdpr/consent_records/add/",
            get(add_consent_record_form_handler).post(create_consent_record_handler),
        )
        .route(
            "/gdpr/consent_records/{id}/edit/",
            get(edit_consent_record_form_handler).post(update_consent_record_handler),
        )
        .route(
            "/gdpr/consent_records/{id}/delete/",
            post(delete_consent_record_handler),
        )
        .route(
            "/gdpr/consent_records/bulk/",
            post(bulk_consent_record_handler),
        )
}
