// gdpr-backend/src/api/dto/assistant_dto.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// アシスタントに公開するツール定義
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolDefinitionDto {
    pub name: String,
    pub description: String,
    pub module_id: String,
    pub required_permission: String,
    pub requires_confirmation: bool,
    pub parameters: Value,
}

/// ツール実行リクエスト
#[derive(Deserialize, Debug, Clone)]
pub struct ToolInvocationRequest {
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
    /// 確認が必要なツールは true で再送する
    #[serde(default)]
    pub confirmed: bool,
}

fn empty_arguments() -> Value {
    Value::Object(Default::default())
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolInvocationResponse {
    pub tool: String,
    pub result: Value,
}
