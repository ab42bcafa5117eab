// gdpr-backend/src/service/dashboard_service.rs

use crate::api::dto::dashboard_dto::DashboardDto;
use crate::error::AppResult;
use crate::service::consent_record_service::ConsentRecordService;
use crate::service::data_request_service::DataRequestService;
use std::sync::Arc;
use uuid::Uuid;

pub struct DashboardService {
    consent_record_service: Arc<ConsentRecordService>,
    data_request_service: Arc<DataRequestService>,
}

impl DashboardService {
    pub fn new(
        consent_record_service: Arc<ConsentRecordService>,
        data_request_service: Arc<DataRequestService>,
    ) -> Self {
        Self {
            consent_record_service,
            data_request_service,
        }
    }

    pub async fn summary(&self, hub_id: Uuid) -> AppResult<DashboardDto> {
        Ok(DashboardDto {
            total_consent_records: self.consent_record_service.count(hub_id).await?,
            total_data_requests: self.data_request_service.count(hub_id).await?,
        })
    }
}
