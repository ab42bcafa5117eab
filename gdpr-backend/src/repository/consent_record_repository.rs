// gdpr-backend/src/repository/consent_record_repository.rs
use crate::api::dto::consent_record_dto::ConsentRecordInput;
use crate::domain::consent_record_model::{
    self, ActiveModel as ConsentRecordActiveModel, Column, Entity as ConsentRecordEntity,
};
use crate::domain::hub_scoped::HubScoped;
use crate::repository::listing::{self, icontains, ListPage};
use crate::types::query::{ListParams, ListingSpec};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

/// 検索対象・ソート許可リスト
pub const CONSENT_RECORD_LISTING: ListingSpec<Column> = ListingSpec {
    search_columns: &[Column::SubjectName, Column::SubjectEmail, Column::Purpose],
    sort_fields: &[
        ("consented", Column::Consented),
        ("subject_name", Column::SubjectName),
        ("subject_email", Column::SubjectEmail),
        ("purpose", Column::Purpose),
        ("consent_date", Column::ConsentDate),
        ("withdrawal_date", Column::WithdrawalDate),
        ("created_at", Column::CreatedAt),
    ],
    default_sort: ("consented", Column::Consented),
};

/// アシスタント向け一覧の絞り込み
#[derive(Debug, Clone, Default)]
pub struct ConsentRecordToolFilter {
    pub purpose: Option<String>,
    pub consented: Option<bool>,
    pub limit: u64,
}

pub struct ConsentRecordRepository {
    db: DbConn,
}

impl ConsentRecordRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        hub_id: Uuid,
        input: ConsentRecordInput,
    ) -> Result<consent_record_model::Model, DbErr> {
        let mut active: ConsentRecordActiveModel = ActiveModelBehavior::new();
        active.hub_id = Set(hub_id);
        apply_input(&mut active, input);
        active.insert(&self.db).await
    }

    /// 全フィールド上書き。対象が見えない場合は None
    pub async fn update(
        &self,
        hub_id: Uuid,
        id: Uuid,
        input: ConsentRecordInput,
    ) -> Result<Option<consent_record_model::Model>, DbErr> {
        let Some(existing) = self.find_visible_by_id(hub_id, id).await? else {
            return Ok(None);
        };

        let mut active: ConsentRecordActiveModel = existing.into();
        apply_input(&mut active, input);
        active.update(&self.db).await.map(Some)
    }

    pub async fn find_visible_by_id(
        &self,
        hub_id: Uuid,
        id: Uuid,
    ) -> Result<Option<consent_record_model::Model>, DbErr> {
        ConsentRecordEntity::find_by_id(id)
            .filter(ConsentRecordEntity::visible_condition(hub_id))
            .one(&self.db)
            .await
    }

    /// 論理削除済みも含めて取得
    pub async fn find_by_id_with_deleted(
        &self,
        hub_id: Uuid,
        id: Uuid,
    ) -> Result<Option<consent_record_model::Model>, DbErr> {
        ConsentRecordEntity::find_by_id(id)
            .filter(ConsentRecordEntity::tenant_condition(hub_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_with_deleted(
        &self,
        hub_id: Uuid,
    ) -> Result<Vec<consent_record_model::Model>, DbErr> {
        listing::fetch_all_with_deleted::<ConsentRecordEntity, _>(&self.db, hub_id).await
    }

    pub async fn list_page(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> Result<ListPage<consent_record_model::Model>, DbErr> {
        listing::fetch_page::<ConsentRecordEntity, _>(
            &self.db,
            hub_id,
            CONSENT_RECORD_LISTING.search_columns,
            params,
        )
        .await
    }

    pub async fn list_all(
        &self,
        hub_id: Uuid,
        params: &ListParams<Column>,
    ) -> Result<Vec<consent_record_model::Model>, DbErr> {
        listing::fetch_all::<ConsentRecordEntity, _>(
            &self.db,
            hub_id,
            CONSENT_RECORD_LISTING.search_columns,
            params,
        )
        .await
    }

    pub async fn count_visible(&self, hub_id: Uuid) -> Result<u64, DbErr> {
        listing::count_visible::<ConsentRecordEntity, _>(&self.db, hub_id).await
    }

    /// 単一の論理削除。対象が見えない場合は false
    pub async fn soft_delete(&self, hub_id: Uuid, id: Uuid) -> Result<bool, DbErr> {
        let affected = self.soft_delete_many(hub_id, &[id]).await?;
        Ok(affected > 0)
    }

    pub async fn soft_delete_many(&self, hub_id: Uuid, ids: &[Uuid]) -> Result<u64, DbErr> {
        listing::soft_delete_many::<ConsentRecordEntity, _>(&self.db, hub_id, ids).await
    }

    pub async fn find_for_tool(
        &self,
        hub_id: Uuid,
        filter: &ConsentRecordToolFilter,
    ) -> Result<Vec<consent_record_model::Model>, DbErr> {
        let mut conditions = ConsentRecordEntity::visible_condition(hub_id);

        // 目的の部分一致
        if let Some(purpose) = filter.purpose.as_deref().filter(|p| !p.is_empty()) {
            conditions = conditions.add(icontains(Column::Purpose, purpose));
        }

        if let Some(consented) = filter.consented {
            conditions = conditions.add(Column::Consented.eq(consented));
        }

        ConsentRecordEntity::find()
            .filter(conditions)
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .limit(filter.limit)
            .all(&self.db)
            .await
    }
}

fn apply_input(active: &mut ConsentRecordActiveModel, input: ConsentRecordInput) {
    active.subject_name = Set(input.subject_name);
    active.subject_email = Set(input.subject_email);
    active.purpose = Set(input.purpose);
    active.consented = Set(input.consented);
    active.consent_date = Set(input.consent_date);
    active.withdrawal_date = Set(input.withdrawal_date);
}
