// gdpr-backend/src/service/data_request_service.rs

use crate::api::dto::bulk_action_dto::{BulkAction, BulkActionForm};
use crate::api::dto::data_request_dto::{DataRequestDto, DataRequestInput};
use crate::api::dto::{ListRefreshResponse, ListResponse, SavedResponse};
use crate::db::DbPool;
use crate::domain::data_request_model::{self, Column};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::data_request_repository::{
    DataRequestRepository, DataRequestToolFilter, DATA_REQUEST_LISTING,
};
use crate::service::export_service::{self, ListingOutcome};
use crate::types::query::{ListParams, ListQuery};
use std::sync::Arc;
use uuid::Uuid;

pub struct DataRequestService {
    repo: Arc<DataRequestRepository>,
}

impl DataRequestService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(DataRequestRepository::new(db_pool)),
        }
    }

    // --- 一覧 / エクスポート ---

    pub async fn list(
        &self,
        hub_id: Uuid,
        query: &ListQuery,
    ) -> AppResult<ListingOutcome<DataRequestDto>> {
        let params = query.normalize(&DATA_REQUEST_LISTING);

        if let Some(format) = params.export {
            let rows = self.repo.list_all(hub_id, &params).await?;
            log_with_context!(
                tracing::Level::INFO,
                "Exporting data requests",
                "hub_id" => hub_id,
                "format" => format,
                "rows" => rows.len()
            );
            return Ok(ListingOutcome::Export(export_service::export(&rows, format)?));
        }

        self.page(hub_id, &params).await.map(ListingOutcome::Page)
    }

    pub async fn first_page(&self, hub_id: Uuid) -> AppResult<ListResponse<DataRequestDto>> {
        let params = ListParams::first_page(&DATA_REQUEST_LISTING);
        self.page(hub_id, &params).await
    }

    async fn page(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> AppResult<ListResponse<DataRequestDto>> {
        let page = self.repo.list_page(hub_id, params).await?;
        Ok(ListResponse::from_page(page, params))
    }

    // --- CRUD ---

    pub async fn get(&self, hub_id: Uuid, id: Uuid) -> AppResult<DataRequestDto> {
        self.repo
            .find_visible_by_id(hub_id, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// 作成のみ (一覧の再描画なし)。アシスタントツールからも使う
    pub async fn create_record(
        &self,
        hub_id: Uuid,
        input: DataRequestInput,
    ) -> AppResult<data_request_model::Model> {
        let record = self.repo.create(hub_id, input).await?;
        log_with_context!(
            tracing::Level::INFO,
            "Data request created",
            "hub_id" => hub_id,
            "record_id" => record.id,
            "request_type" => &record.request_type
        );
        Ok(record)
    }

    pub async fn create(
        &self,
        hub_id: Uuid,
        input: DataRequestInput,
    ) -> AppResult<SavedResponse<DataRequestDto>> {
        let record = self.create_record(hub_id, input).await?;

        Ok(SavedResponse {
            record: record.into(),
            list: self.first_page(hub_id).await?,
        })
    }

    pub async fn update(
        &self,
        hub_id: Uuid,
        id: Uuid,
        input: DataRequestInput,
    ) -> AppResult<SavedResponse<DataRequestDto>> {
        let record = self
            .repo
            .update(hub_id, id, input)
            .await?
            .ok_or_else(|| not_found(id))?;
        log_with_context!(
            tracing::Level::INFO,
            "Data request updated",
            "hub_id" => hub_id,
            "record_id" => record.id,
            "status" => &record.status
        );

        Ok(SavedResponse {
            record: record.into(),
            list: self.first_page(hub_id).await?,
        })
    }

    pub async fn delete(
        &self,
        hub_id: Uuid,
        id: Uuid,
    ) -> AppResult<ListRefreshResponse<DataRequestDto>> {
        if !self.repo.soft_delete(hub_id, id).await? {
            return Err(not_found(id));
        }
        log_with_context!(
            tracing::Level::INFO,
            "Data request deleted",
            "hub_id" => hub_id,
            "record_id" => id
        );

        Ok(ListRefreshResponse {
            affected: 1,
            list: self.first_page(hub_id).await?,
        })
    }

    pub async fn bulk_action(
        &self,
        hub_id: Uuid,
        form: &BulkActionForm,
    ) -> AppResult<ListRefreshResponse<DataRequestDto>> {
        let affected = match form.action() {
            BulkAction::Delete => {
                let ids = form.parsed_ids();
                let affected = self.repo.soft_delete_many(hub_id, &ids).await?;
                log_with_context!(
                    tracing::Level::INFO,
                    "Data requests bulk deleted",
                    "hub_id" => hub_id,
                    "requested" => ids.len(),
                    "affected" => affected
                );
                affected
            }
            BulkAction::Unknown(action) => {
                log_with_context!(
                    tracing::Level::DEBUG,
                    "Ignoring unknown bulk action",
                    "hub_id" => hub_id,
                    "action" => &action
                );
                0
            }
        };

        Ok(ListRefreshResponse {
            affected,
            list: self.first_page(hub_id).await?,
        })
    }

    // --- 集計 / その他 ---

    pub async fn count(&self, hub_id: Uuid) -> AppResult<u64> {
        Ok(self.repo.count_visible(hub_id).await?)
    }

    pub async fn all_including_deleted(
        &self,
        hub_id: Uuid,
    ) -> AppResult<Vec<data_request_model::Model>> {
        Ok(self.repo.find_all_with_deleted(hub_id).await?)
    }

    pub async fn find_for_tool(
        &self,
        hub_id: Uuid,
        filter: &DataRequestToolFilter,
    ) -> AppResult<Vec<data_request_model::Model>> {
        Ok(self.repo.find_for_tool(hub_id, filter).await?)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Data request with id {} not found", id))
}
