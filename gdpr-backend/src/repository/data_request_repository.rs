// gdpr-backend/src/repository/data_request_repository.rs
use crate::api::dto::data_request_dto::DataRequestInput;
use crate::domain::data_request_model::{
    self, ActiveModel as DataRequestActiveModel, Column, Entity as DataRequestEntity,
};
use crate::domain::hub_scoped::HubScoped;
use crate::repository::listing::{self, ListPage};
use crate::types::query::{ListParams, ListingSpec};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

pub const DATA_REQUEST_LISTING: ListingSpec<Column> = ListingSpec {
    search_columns: &[
        Column::SubjectName,
        Column::SubjectEmail,
        Column::RequestType,
        Column::Status,
    ],
    sort_fields: &[
        ("request_type", Column::RequestType),
        ("status", Column::Status),
        ("subject_name", Column::SubjectName),
        ("subject_email", Column::SubjectEmail),
        ("completed_at", Column::CompletedAt),
        ("notes", Column::Notes),
        ("created_at", Column::CreatedAt),
    ],
    default_sort: ("request_type", Column::RequestType),
};

/// アシスタント向け一覧の絞り込み (完全一致)
#[derive(Debug, Clone, Default)]
pub struct DataRequestToolFilter {
    pub request_type: Option<String>,
    pub status: Option<String>,
}

pub struct DataRequestRepository {
    db: DbConn,
}

impl DataRequestRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        hub_id: Uuid,
        input: DataRequestInput,
    ) -> Result<data_request_model::Model, DbErr> {
        let mut active: DataRequestActiveModel = ActiveModelBehavior::new();
        active.hub_id = Set(hub_id);
        apply_input(&mut active, input);
        active.insert(&self.db).await
    }

    pub async fn update(
        &self,
        hub_id: Uuid,
        id: Uuid,
        input: DataRequestInput,
    ) -> Result<Option<data_request_model::Model>, DbErr> {
        let Some(existing) = self.find_visible_by_id(hub_id, id).await? else {
            return Ok(None);
        };

        let mut active: DataRequestActiveModel = existing.into();
        apply_input(&mut active, input);
        active.update(&self.db).await.map(Some)
    }

    pub async fn find_visible_by_id(
        &self,
        hub_id: Uuid,
        id: Uuid,
    ) -> Result<Option<data_request_model::Model>, DbErr> {
        DataRequestEntity::find_by_id(id)
            .filter(DataRequestEntity::visible_condition(hub_id))
            .one(&self.db)
            .await
    }

    pub async fn find_by_id_with_deleted(
        &self,
        hub_id: Uuid,
        id: Uuid,
    ) -> Result<Option<data_request_model::Model>, DbErr> {
        DataRequestEntity::find_by_id(id)
            .filter(DataRequestEntity::tenant_condition(hub_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_with_deleted(
        &self,
        hub_id: Uuid,
    ) -> Result<Vec<data_request_model::Model>, DbErr> {
        listing::fetch_all_with_deleted::<DataRequestEntity, _>(&self.db, hub_id).await
    }

    pub async fn list_page(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> Result<ListPage<data_request_model::Model>, DbErr> {
        listing::fetch_page::<DataRequestEntity, _>(
            &self.db,
            hub_id,
            DATA_REQUEST_LISTING.search_columns,
            params,
        )
        .await
    }

    pub async fn list_all(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> Result<Vec<data_request_model::Model>, DbErr> {
        listing::fetch_all::<DataRequestEntity, _>(
            &self.db,
            hub_id,
            DATA_REQUEST_LISTING.search_columns,
            params,
        )
        .await
    }

    pub async fn count_visible(&self, hub_id: Uuid) -> Result<u64, DbErr> {
        listing::count_visible::<DataRequestEntity, _>(&self.db, hub_id).await
    }

    pub async fn soft_delete(&self, hub_id: Uuid, id: Uuid) -> Result<bool, DbErr> {
        let affected = self.soft_delete_many(hub_id, &[id]).await?;
        Ok(affected > 0)
    }

    pub async fn soft_delete_many(&self, hub_id: Uuid, ids: &[Uuid]) -> Result<u64, DbErr> {
        listing::soft_delete_many::<DataRequestEntity, _>(&self.db, hub_id, ids).await
    }

    /// 新しい順
    pub async fn find_for_tool(
        &self,
        hub_id: Uuid,
        filter: &DataRequestToolFilter,
    ) -> Result<Vec<data_request_model::Model>, DbErr> {
        let mut conditions = DataRequestEntity::visible_condition(hub_id);

        if let Some(request_type) = filter.request_type.as_deref().filter(|v| !v.is_empty()) {
            conditions = conditions.add(Column::RequestType.eq(request_type));
        }

        if let Some(status) = filter.status.as_deref().filter(|v| !v.is_empty()) {
            conditions = conditions.add(Column::Status.eq(status));
        }

        DataRequestEntity::find()
            .filter(conditions)
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
    }
}

fn apply_input(active: &mut DataRequestActiveModel, input: DataRequestInput) {
    active.subject_name = Set(input.subject_name);
    active.subject_email = Set(input.subject_email);
    active.request_type = Set(input.request_type);
    active.status = Set(input.status);
    active.completed_at = Set(input.completed_at);
    active.notes = Set(input.notes);
}
