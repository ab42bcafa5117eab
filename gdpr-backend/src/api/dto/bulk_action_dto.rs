// gdpr-backend/src/api/dto/bulk_action_dto.rs

use serde::Deserialize;
use uuid::Uuid;

/// 一括操作フォーム
#[derive(Deserialize, Debug, Default, Clone)]
pub struct BulkActionForm {
    /// カンマ区切りの id
    pub ids: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    /// 未知の操作は何もしない
    Unknown(String),
}

impl BulkAction {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "delete" => BulkAction::Delete,
            other => BulkAction::Unknown(other.to_string()),
        }
    }
}

impl BulkActionForm {
    pub fn action(&self) -> BulkAction {
        BulkAction::parse(self.action.as_deref())
    }

    /// 空要素と UUID でない要素は無視する
    pub fn parsed_ids(&self) -> Vec<Uuid> {
        self.ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .filter_map(|id| Uuid::parse_str(id).ok())
            .collect()
    }
}
