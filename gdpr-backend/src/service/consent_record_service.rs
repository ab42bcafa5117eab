// gdpr-backend/src/service/consent_record_service.rs

use crate::api::dto::bulk_action_dto::{BulkAction, BulkActionForm};
use crate::api::dto::consent_record_dto::{ConsentRecordDto, ConsentRecordInput};
use crate::api::dto::{ListRefreshResponse, ListResponse, SavedResponse};
use crate::db::DbPool;
use crate::domain::consent_record_model::{self, Column};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::consent_record_repository::{
    ConsentRecordRepository, ConsentRecordToolFilter, CONSENT_RECORD_LISTING,
};
use crate::service::export_service::{self, ListingOutcome};
use crate::types::query::{ListParams, ListQuery};
use std::sync::Arc;
use uuid::Uuid;

pub struct ConsentRecordService {
    repo: Arc<ConsentRecordRepository>,
}

impl ConsentRecordService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ConsentRecordRepository::new(db_pool)),
        }
    }

    // --- 一覧 / エクスポート ---

    pub async fn list(
        &self,
        hub_id: Uuid,
        query: &ListQuery,
    ) -> AppResult<ListingOutcome<ConsentRecordDto>> {
        let params = query.normalize(&CONSENT_RECORD_LISTING);

        if let Some(format) = params.export {
            let rows = self.repo.list_all(hub_id, &params).await?;
            log_with_context!(
                tracing::Level::INFO,
                "Exporting consent records",
                "hub_id" => hub_id,
                "format" => format,
                "rows" => rows.len()
            );
            return Ok(ListingOutcome::Export(export_service::export(&rows, format)?));
        }

        self.page(hub_id, &params).await.map(ListingOutcome::Page)
    }

    /// 保存後の再描画 (1ページ目・デフォルトソート)
    pub async fn first_page(&self, hub_id: Uuid) -> AppResult<ListResponse<ConsentRecordDto>> {
        let params = ListParams::first_page(&CONSENT_RECORD_LISTING);
        self.page(hub_id, &params).await
    }

    async fn page(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> AppResult<ListResponse<ConsentRecordDto>> {
        let page = self.repo.list_page(hub_id, params).await?;
        Ok(ListResponse::from_page(page, params))
    }

    // --- CRUD ---

    pub async fn get(&self, hub_id: Uuid, id: Uuid) -> AppResult<ConsentRecordDto> {
        self.repo
            .find_visible_by_id(hub_id, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(
        &self,
        hub_id: Uuid,
        input: ConsentRecordInput,
    ) -> AppResult<SavedResponse<ConsentRecordDto>> {
        let record = self.repo.create(hub_id, input).await?;
        log_with_context!(
            tracing::Level::INFO,
            "Consent record created",
            "hub_id" => hub_id,
            "record_id" => record.id
        );

        Ok(SavedResponse {
            record: record.into(),
            list: self.first_page(hub_id).await?,
        })
    }

    pub async fn update(
        &self,
        hub_id: Uuid,
        id: Uuid,
        input: ConsentRecordInput,
    ) -> AppResult<SavedResponse<ConsentRecordDto>> {
        let record = self
            .repo
            .update(hub_id, id, input)
            .await?
            .ok_or_else(|| not_found(id))?;
        log_with_context!(
            tracing::Level::INFO,
            "Consent record updated",
            "hub_id" => hub_id,
            "record_id" => record.id
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
    ) -> AppResult<ListRefreshResponse<ConsentRecordDto>> {
        if !self.repo.soft_delete(hub_id, id).await? {
            return Err(not_found(id));
        }
        log_with_context!(
            tracing::Level::INFO,
            "Consent record deleted",
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
    ) -> AppResult<ListRefreshResponse<ConsentRecordDto>> {
        let affected = match form.action() {
            BulkAction::Delete => {
                let ids = form.parsed_ids();
                let affected = self.repo.soft_delete_many(hub_id, &ids).await?;
                log_with_context!(
                    tracing::Level::INFO,
                    "Consent records bulk deleted",
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

    /// 論理削除済みを含む全件
    pub async fn all_including_deleted(
        &self,
        hub_id: Uuid,
    ) -> AppResult<Vec<consent_record_model::Model>> {
        Ok(self.repo.find_all_with_deleted(hub_id).await?)
    }

    pub async fn find_for_tool(
        &self,
        hub_id: Uuid,
        filter: &ConsentRecordToolFilter,
    ) -> AppResult<Vec<consent_record_model::Model>> {
        Ok(self.repo.find_for_tool(hub_id, filter).await?)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Consent record with id {} not found", id))
}
