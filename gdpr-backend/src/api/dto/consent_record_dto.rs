// gdpr-backend/src/api/dto/consent_record_dto.rs

use crate::api::dto::common::trimmed;
use crate::domain::consent_record_model;
use crate::types::datetime::parse_form_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Request DTOs ---

/// 同意記録フォーム (application/x-www-form-urlencoded)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ConsentRecordForm {
    pub subject_name: Option<String>,
    pub subject_email: Option<String>,
    pub purpose: Option<String>,
    /// チェックボックス。`on` のときのみ true
    pub consented: Option<String>,
    pub consent_date: Option<String>,
    pub withdrawal_date: Option<String>,
}

/// 保存する全フィールド。編集時もそのまま上書きする
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRecordInput {
    pub subject_name: String,
    pub subject_email: String,
    pub purpose: String,
    pub consented: bool,
    pub consent_date: Option<DateTime<Utc>>,
    pub withdrawal_date: Option<DateTime<Utc>>,
}

impl From<ConsentRecordForm> for ConsentRecordInput {
    fn from(form: ConsentRecordForm) -> Self {
        Self {
            subject_name: trimmed(form.subject_name),
            subject_email: trimmed(form.subject_email),
            purpose: trimmed(form.purpose),
            consented: form.consented.as_deref().map(str::trim) == Some("on"),
            consent_date: parse_form_datetime(form.consent_date.as_deref()),
            withdrawal_date: parse_form_datetime(form.withdrawal_date.as_deref()),
        }
    }
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConsentRecordDto {
    pub id: Uuid,
    pub subject_name: String,
    pub subject_email: String,
    pub purpose: String,
    pub consented: bool,
    pub consent_date: Option<DateTime<Utc>>,
    pub withdrawal_date: Option<DateTime<Utc>>,
    pub is_withdrawn: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<consent_record_model::Model> for ConsentRecordDto {
    fn from(model: consent_record_model::Model) -> Self {
        Self {
            is_withdrawn: model.is_withdrawn(),
            id: model.id,
            subject_name: model.subject_name,
            subject_email: model.subject_email,
            purpose: model.purpose,
            consented: model.consented,
            consent_date: model.consent_date,
            withdrawal_date: model.withdrawal_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// 追加・編集フォームの表示内容
#[derive(Serialize, Debug, Clone)]
pub struct ConsentRecordFormDto {
    pub is_edit: bool,
    pub record: Option<ConsentRecordDto>,
}
