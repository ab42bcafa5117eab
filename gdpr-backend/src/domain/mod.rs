// gdpr-backend/src/domain/mod.rs

pub mod consent_record_model;
pub mod data_request_model;
pub mod data_request_type;
pub mod hub_scoped;
pub mod module_manifest;
pub mod permission;
