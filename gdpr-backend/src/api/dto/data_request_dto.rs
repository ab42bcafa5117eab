// gdpr-backend/src/api/dto/data_request_dto.rs

use crate::api::dto::common::{trimmed, ChoiceDto};
use crate::domain::data_request_model::{self, DEFAULT_STATUS};
use crate::domain::data_request_type::DataRequestType;
use crate::types::datetime::parse_form_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Request DTOs ---

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DataRequestForm {
    pub subject_name: Option<String>,
    pub subject_email: Option<String>,
    pub request_type: Option<String>,
    pub status: Option<String>,
    pub completed_at: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequestInput {
    pub subject_name: String,
    pub subject_email: String,
    pub request_type: String,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: String,
}

impl DataRequestForm {
    /// 追加時: ステータス未指定は `pending`
    pub fn into_create_input(self) -> DataRequestInput {
        let mut input = self.into_update_input();
        if input.status.is_empty() {
            input.status = DEFAULT_STATUS.to_string();
        }
        input
    }

    /// 編集時: 送信値で全フィールドを上書き
    pub fn into_update_input(self) -> DataRequestInput {
        DataRequestInput {
            subject_name: trimmed(self.subject_name),
            subject_email: trimmed(self.subject_email),
            request_type: trimmed(self.request_type),
            status: trimmed(self.status),
            completed_at: parse_form_datetime(self.completed_at.as_deref()),
            notes: trimmed(self.notes),
        }
    }
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataRequestDto {
    pub id: Uuid,
    pub subject_name: String,
    pub subject_email: String,
    pub request_type: String,
    /// 既知の種別のときのみ表示名
    pub request_type_display: Option<String>,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<data_request_model::Model> for DataRequestDto {
    fn from(model: data_request_model::Model) -> Self {
        Self {
            request_type_display: model
                .known_request_type()
                .map(|kind| kind.display_name().to_string()),
            is_completed: model.is_completed(),
            id: model.id,
            subject_name: model.subject_name,
            subject_email: model.subject_email,
            request_type: model.request_type,
            status: model.status,
            completed_at: model.completed_at,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct DataRequestFormDto {
    pub is_edit: bool,
    pub record: Option<DataRequestDto>,
    pub request_type_choices: Vec<ChoiceDto>,
    pub default_status: &'static str,
}

impl DataRequestFormDto {
    pub fn new(record: Option<DataRequestDto>) -> Self {
        Self {
            is_edit: record.is_some(),
            record,
            request_type_choices: request_type_choices(),
            default_status: DEFAULT_STATUS,
        }
    }
}

pub fn request_type_choices() -> Vec<ChoiceDto> {
    DataRequestType::ALL
        .iter()
        .map(|kind| ChoiceDto {
            value: kind.as_str(),
            label: kind.display_name(),
        })
        .collect()
}
