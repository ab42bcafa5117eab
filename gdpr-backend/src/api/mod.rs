// gdpr-backend/src/api/mod.rs
use crate::assistant::ToolRegistry;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::session::require_session;
use crate::service::{
    consent_record_service::ConsentRecordService, dashboard_service::DashboardService,
    data_request_service::DataRequestService,
};
use crate::utils::session_token::{SessionManager, SessionTokenError};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub consent_record_service: Arc<ConsentRecordService>,
    pub data_request_service: Arc<DataRequestService>,
    pub dashboard_service: Arc<DashboardService>,
    pub tool_registry: Arc<ToolRegistry>,
    pub session_manager: Arc<SessionManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DbPool, config: AppConfig) -> Result<Self, SessionTokenError> {
        let session_manager = Arc::new(SessionManager::new(&config.session)?);

        let consent_record_service = Arc::new(ConsentRecordService::new(db_pool.clone()));
        let data_request_service = Arc::new(DataRequestService::new(db_pool));
        let dashboard_service = Arc::new(DashboardService::new(
            consent_record_service.clone(),
            data_request_service.clone(),
        ));
        let tool_registry = Arc::new(ToolRegistry::gdpr(
            consent_record_service.clone(),
            data_request_service.clone(),
        ));

        Ok(Self {
            consent_record_service,
            data_request_service,
            dashboard_service,
            tool_registry,
            session_manager,
            config: Arc::new(config),
        })
    }
}

/// `/gdpr` 以下の全ルート。すべてハブセッション必須
pub fn gdpr_router(app_state: AppState) -> Router {
    Router::new()
        .merge(handlers::dashboard_handler::dashboard_router())
        .merge(handlers::consent_record_handler::consent_record_router())
        .merge(handlers::data_request_handler::data_request_router())
        .merge(handlers::settings_handler::settings_router())
        .merge(handlers::assistant_handler::assistant_router())
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ))
        .with_state(app_state)
}

/// ミドルウェア込みのアプリケーション
pub fn build_app(app_state: AppState) -> Router {
    let body_limit = app_state.config.server.body_limit;

    gdpr_router(app_state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(body_limit))
}
