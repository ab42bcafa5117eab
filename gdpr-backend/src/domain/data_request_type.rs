// gdpr-backend/src/domain/data_request_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GDPRで定められたデータ主体リクエストの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataRequestType {
    Access,
    Erasure,
    Portability,
    Rectification,
}

impl DataRequestType {
    pub const ALL: [DataRequestType; 4] = [
        DataRequestType::Access,
        DataRequestType::Erasure,
        DataRequestType::Portability,
        DataRequestType::Rectification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataRequestType::Access => "access",
            DataRequestType::Erasure => "erasure",
            DataRequestType::Portability => "portability",
            DataRequestType::Rectification => "rectification",
        }
    }

    /// Get display name for request type
    pub fn display_name(&self) -> &'static str {
        match self {
            DataRequestType::Access => "Data Access",
            DataRequestType::Erasure => "Right to Erasure",
            DataRequestType::Portability => "Data Portability",
            DataRequestType::Rectification => "Rectification",
        }
    }
}

impl FromStr for DataRequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "access" => Ok(DataRequestType::Access),
            "erasure" => Ok(DataRequestType::Erasure),
            "portability" => Ok(DataRequestType::Portability),
            "rectification" => Ok(DataRequestType::Rectification),
            _ => Err(format!("Invalid request type: {}", s)),
        }
    }
}

impl fmt::Display for DataRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
