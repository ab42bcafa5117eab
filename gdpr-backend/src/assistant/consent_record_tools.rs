// gdpr-backend/src/assistant/consent_record_tools.rs

use crate::assistant::{parse_args, AssistantTool};
use crate::domain::permission::VIEW_CONSENT_RECORD;
use crate::error::AppResult;
use crate::middleware::session::HubSession;
use crate::repository::consent_record_repository::ConsentRecordToolFilter;
use crate::service::consent_record_service::ConsentRecordService;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const DEFAULT_LIMIT: u64 = 20;
/// 1回の呼び出しで返す最大件数
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListConsentRecordsArgs {
    purpose: Option<String>,
    consented: Option<bool>,
    limit: Option<u64>,
}

pub struct ListConsentRecords {
    service: Arc<ConsentRecordService>,
}

impl ListConsentRecords {
    pub fn new(service: Arc<ConsentRecordService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AssistantTool for ListConsentRecords {
    fn name(&self) -> &'static str {
        "list_consent_records"
    }

    fn description(&self) -> &'static str {
        "List GDPR consent records."
    }

    fn required_permission(&self) -> &'static str {
        VIEW_CONSENT_RECORD
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "purpose": {"type": "string"},
                "consented": {"type": "boolean"},
                "limit": {"type": "integer", "minimum": 0, "maximum": MAX_LIMIT}
            },
            "required": [],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: Value, session: &HubSession) -> AppResult<Value> {
        let args: ListConsentRecordsArgs = parse_args(self.name(), args)?;
        let filter = ConsentRecordToolFilter {
            purpose: args.purpose,
            consented: args.consented,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        };

        let records = self.service.find_for_tool(session.hub_id, &filter).await?;
        let records: Vec<Value> = records
            .into_iter()
            .map(|r| {
                json!({
                    "id": r.id.to_string(),
                    "subject_name": r.subject_name,
                    "subject_email": r.subject_email,
                    "purpose": r.purpose,
                    "consented": r.consented,
                    "consent_date": r.consent_date.map(|d| d.to_rfc3339()),
                })
            })
            .collect();

        Ok(json!({ "records": records }))
    }
}
