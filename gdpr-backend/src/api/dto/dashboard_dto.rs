// gdpr-backend/src/api/dto/dashboard_dto.rs

use serde::{Deserialize, Serialize};

/// ダッシュボードの件数 (自テナント・未削除)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DashboardDto {
    pub total_consent_records: u64,
    pub total_data_requests: u64,
}
