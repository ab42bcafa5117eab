// gdpr-backend/src/domain/data_request_model.rs

use crate::domain::data_request_type::DataRequestType;
use crate::domain::hub_scoped::HubScoped;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 新規データ主体リクエストの初期ステータス
pub const DEFAULT_STATUS: &str = "pending";

/// データ主体リクエスト（アクセス・消去・ポータビリティ・訂正）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gdpr_datarequest")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hub_id: Uuid,
    pub subject_name: String,
    pub subject_email: String,
    pub request_type: String,
    pub status: String,
    #[sea_orm(nullable)]
    pub completed_at: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
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
            status: Set(DEFAULT_STATUS.to_string()),
            notes: Set(String::new()),
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
    /// 既知のリクエスト種別であればその列挙値
    pub fn known_request_type(&self) -> Option<DataRequestType> {
        self.request_type.parse().ok()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn is_visible_to(&self, hub_id: Uuid) -> bool {
        self.hub_id == hub_id && !self.is_deleted
    }
}
