// gdpr-backend/src/domain/consent_record_model.rs

use crate::domain::hub_scoped::HubScoped;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 同意記録: 誰が、何の目的に、いつ同意したか（撤回されたか）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gdpr_consentrecord")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hub_id: Uuid,
    pub subject_name: String,
    pub subject_email: String,
    pub purpose: String,
    pub consented: bool,
    #[sea_orm(nullable)]
    pub consent_date: Option<DateTime<Utc>>,
    #[sea_orm(nullable)]
    pub withdrawal_date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Set(Uuid::new_v4()),
            consented: Set(false),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            // 更新の場合のみ updated_at を更新
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl HubScoped for Entity {
    fn id_column() -> Column {
        Column::Id
    }

    fn hub_id_column() -> Column {
        Column::HubId
    }

    fn is_deleted_column() -> Column {
        Column::IsDeleted
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }
}

impl Model {
    /// 同意が撤回されているか
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawal_date.is_some()
    }

    pub fn is_visible_to(&self, hub_id: Uuid) -> bool {
        self.hub_id == hub_id && !self.is_deleted
    }
}
