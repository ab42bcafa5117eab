// gdpr-backend/src/api/handlers/mod.rs
pub mod assistant_handler;
pub mod consent_record_handler;
pub mod dashboard_handler;
pub mod data_request_handler;
pub mod settings_handler;
