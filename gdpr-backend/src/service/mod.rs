// gdpr-backend/src/service/mod.rs
pub mod consent_record_service;
pub mod dashboard_service;
pub mod data_request_service;
pub mod export_service;
