// gdpr-backend/src/config/mod.rs

pub mod app;

pub use app::{AppConfig, DatabaseConfig, ServerConfig, SessionConfig};

// Backward compatibility
pub type Config = AppConfig;
