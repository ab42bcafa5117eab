// gdpr-backend/src/assistant/data_request_tools.rs

use crate::api::dto::data_request_dto::DataRequestInput;
use crate::assistant::{parse_args, AssistantTool};
use crate::domain::data_request_model::DEFAULT_STATUS;
use crate::domain::permission::{ADD_DATA_REQUEST, VIEW_DATA_REQUEST};
use crate::error::AppResult;
use crate::middleware::session::HubSession;
use crate::repository::data_request_repository::DataRequestToolFilter;
use crate::service::data_request_service::DataRequestService;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const REQUEST_TYPE_HINT: &str = "access, erasure, portability, rectification";

// --- list_data_requests ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListDataRequestsArgs {
    request_type: Option<String>,
    status: Option<String>,
}

pub struct ListDataRequests {
    service: Arc<DataRequestService>,
}

impl ListDataRequests {
    pub fn new(service: Arc<DataRequestService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AssistantTool for ListDataRequests {
    fn name(&self) -> &'static str {
        "list_data_requests"
    }

    fn description(&self) -> &'static str {
        "List GDPR data requests (access, erasure, portability, rectification)."
    }

    fn required_permission(&self) -> &'static str {
        VIEW_DATA_REQUEST
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "request_type": {"type": "string", "description": REQUEST_TYPE_HINT},
                "status": {"type": "string"}
            },
            "required": [],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: Value, session: &HubSession) -> AppResult<Value> {
        let args: ListDataRequestsArgs = parse_args(self.name(), args)?;
        let filter = DataRequestToolFilter {
            request_type: args.request_type,
            status: args.status,
        };

        let requests: Vec<Value> = self
            .service
            .find_for_tool(session.hub_id, &filter)
            .await?
            .into_iter()
            .map(|r| {
                json!({
                    "id": r.id.to_string(),
                    "subject_name": r.subject_name,
                    "request_type": r.request_type,
                    "status": r.status,
                    "created_at": r.created_at.to_rfc3339(),
                })
            })
            .collect();

        Ok(json!({ "requests": requests }))
    }
}

// --- create_data_request ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateDataRequestArgs {
    subject_name: String,
    subject_email: String,
    request_type: String,
    #[serde(default)]
    notes: String,
}

pub struct CreateDataRequest {
    service: Arc<DataRequestService>,
}

impl CreateDataRequest {
    pub fn new(service: Arc<DataRequestService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AssistantTool for CreateDataRequest {
    fn name(&self) -> &'static str {
        "create_data_request"
    }

    fn description(&self) -> &'static str {
        "Create a GDPR data request."
    }

    fn required_permission(&self) -> &'static str {
        ADD_DATA_REQUEST
    }

    fn requires_confirmation(&self) -> bool {
        true
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "subject_name": {"type": "string"},
                "subject_email": {"type": "string"},
                "request_type": {"type": "string", "description": REQUEST_TYPE_HINT},
                "notes": {"type": "string"}
            },
            "required": ["subject_name", "subject_email", "request_type"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: Value, session: &HubSession) -> AppResult<Value> {
        let args: CreateDataRequestArgs = parse_args(self.name(), args)?;
        let input = DataRequestInput {
            subject_name: args.subject_name,
            subject_email: args.subject_email,
            request_type: args.request_type,
            status: DEFAULT_STATUS.to_string(),
            completed_at: None,
            notes: args.notes,
        };

        let record = self.service.create_record(session.hub_id, input).await?;
        Ok(json!({ "id": record.id.to_string(), "created": true }))
    }
}
