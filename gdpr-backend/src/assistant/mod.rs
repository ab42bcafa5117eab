// gdpr-backend/src/assistant/mod.rs

//! AIアシスタントに公開するツール
//!
//! 各ツールは自身の権限を持ち、レジストリが 権限 → 確認 の順で検査してから実行する。
//! 引数は JSON Schema (`additionalProperties: false`) と同じく未知のキーを拒否する。

pub mod consent_record_tools;
pub mod data_request_tools;

use crate::api::dto::assistant_dto::ToolDefinitionDto;
use crate::domain::module_manifest::MODULE_ID;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::middleware::session::HubSession;
use crate::service::consent_record_service::ConsentRecordService;
use crate::service::data_request_service::DataRequestService;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait AssistantTool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn module_id(&self) -> &'static str {
        MODULE_ID
    }

    fn required_permission(&self) -> &'static str;

    /// true の場合、利用者の明示的な確認後にのみ実行する
    fn requires_confirmation(&self) -> bool {
        false
    }

    /// 引数の JSON Schema
    fn parameters(&self) -> Value;

    async fn execute(&self, args: Value, session: &HubSession) -> AppResult<Value>;
}

/// 引数を型付き構造体へ。未知のキーや型違いは BadRequest
pub fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> AppResult<T> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        Value::Object(_) => args,
        _ => {
            return Err(AppError::BadRequest(format!(
                "Arguments for '{}' must be a JSON object",
                tool
            )))
        }
    };

    serde_json::from_value(args)
        .map_err(|e| AppError::BadRequest(format!("Invalid arguments for '{}': {}", tool, e)))
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn AssistantTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// GDPRモジュールの全ツール
    pub fn gdpr(
        consent_record_service: Arc<ConsentRecordService>,
        data_request_service: Arc<DataRequestService>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(consent_record_tools::ListConsentRecords::new(
            consent_record_service,
        )));
        registry.register(Arc::new(data_request_tools::ListDataRequests::new(
            data_request_service.clone(),
        )));
        registry.register(Arc::new(data_request_tools::CreateDataRequest::new(
            data_request_service,
        )));
        registry
    }

    /// 同名のツールは置き換える
    pub fn register(&mut self, tool: Arc<dyn AssistantTool>) {
        self.tools.retain(|existing| existing.name() != tool.name());
        self.tools.push(tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AssistantTool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// 呼び出し元が権限を持つツールの定義
    pub fn definitions_for(&self, session: &HubSession) -> Vec<ToolDefinitionDto> {
        self.tools
            .iter()
            .filter(|tool| session.has_permission(tool.required_permission()))
            .map(|tool| ToolDefinitionDto {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                module_id: tool.module_id().to_string(),
                required_permission: tool.required_permission().to_string(),
                requires_confirmation: tool.requires_confirmation(),
                parameters: tool.parameters(),
            })
            .collect()
    }

    pub async fn invoke(
        &self,
        name: &str,
        args: Value,
        confirmed: bool,
        session: &HubSession,
    ) -> AppResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Unknown tool '{}'", name)))?;

        session.require_permission(tool.required_permission())?;

        if tool.requires_confirmation() && !confirmed {
            return Err(AppError::ConfirmationRequired(format!(
                "Tool '{}' must be confirmed before it runs",
                name
            )));
        }

        log_with_context!(
            tracing::Level::INFO,
            "Executing assistant tool",
            "tool" => name,
            "hub_id" => session.hub_id,
            "user_id" => session.user_id
        );

        tool.execute(args, session).await
    }
}
