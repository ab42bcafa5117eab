// gdpr-backend/src/api/dto/mod.rs
pub mod assistant_dto;
pub mod bulk_action_dto;
pub mod common;
pub mod consent_record_dto;
pub mod dashboard_dto;
pub mod data_request_dto;
pub mod settings_dto;

// Re-export common response types
pub use common::{ListRefreshResponse, ListResponse, SavedResponse};
