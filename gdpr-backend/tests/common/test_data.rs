// tests/common/test_data.rs

use chrono::{DateTime, Utc};
use gdpr_backend::api::dto::consent_record_dto::ConsentRecordInput;
use gdpr_backend::api::dto::data_request_dto::DataRequestInput;
use gdpr_backend::domain::{consent_record_model, data_request_model};
use gdpr_backend::repository::consent_record_repository::ConsentRecordRepository;
use gdpr_backend::repository::data_request_repository::DataRequestRepository;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

// === 同意記録 ===

pub fn consent_input(name: &str, email: &str, purpose: &str, consented: bool) -> ConsentRecordInput {
    ConsentRecordInput {
        subject_name: name.to_string(),
        subject_email: email.to_string(),
        purpose: purpose.to_string(),
        consented,
        consent_date: consented.then(Utc::now),
        withdrawal_date: None,
    }
}

pub async fn seed_consent(
    db: &DatabaseConnection,
    hub_id: Uuid,
    name: &str,
    email: &str,
    purpose: &str,
    consented: bool,
) -> consent_record_model::Model {
    ConsentRecordRepository::new(db.clone())
        .create(hub_id, consent_input(name, email, purpose, consented))
        .await
        .unwrap()
}

/// `count` 件の同意記録 (Subject 01, Subject 02, ...)
pub async fn seed_consents(
    db: &DatabaseConnection,
    hub_id: Uuid,
    count: usize,
) -> Vec<consent_record_model::Model> {
    let mut records = Vec::with_capacity(count);
    for i in 1..=count {
        records.push(
            seed_consent(
                db,
                hub_id,
                &format!("Subject {:02}", i),
                &format!("subject{:02}@example.com", i),
                "Newsletter",
                i % 2 == 0,
            )
            .await,
        );
    }
    records
}

// === データ主体リクエスト ===

pub fn data_request_input(
    name: &str,
    email: &str,
    request_type: &str,
    status: &str,
) -> DataRequestInput {
    DataRequestInput {
        subject_name: name.to_string(),
        subject_email: email.to_string(),
        request_type: request_type.to_string(),
        status: status.to_string(),
        completed_at: None,
        notes: String::new(),
    }
}

pub async fn seed_data_request(
    db: &DatabaseConnection,
    hub_id: Uuid,
    name: &str,
    request_type: &str,
    status: &str,
) -> data_request_model::Model {
    DataRequestRepository::new(db.clone())
        .create(
            hub_id,
            data_request_input(
                name,
                &format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                request_type,
                status,
            ),
        )
        .await
        .unwrap()
}

pub fn completed_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
