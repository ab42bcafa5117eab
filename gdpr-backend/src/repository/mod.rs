// gdpr-backend/src/repository/mod.rs
pub mod consent_record_repository;
pub mod data_request_repository;
pub mod listing;
