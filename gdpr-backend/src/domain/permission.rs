// gdpr-backend/src/domain/permission.rs

//! GDPRモジュールの権限文字列

pub const VIEW_CONSENT_RECORD: &str = "gdpr.view_consentrecord";
pub const MANAGE_CONSENT: &str = "gdpr.manage_consent";
pub const VIEW_DATA_REQUEST: &str = "gdpr.view_datarequest";
pub const ADD_DATA_REQUEST: &str = "gdpr.add_datarequest";
pub const PROCESS_DATA_REQUEST: &str = "gdpr.process_datarequest";
pub const MANAGE_SETTINGS: &str = "gdpr.manage_settings";

/// モジュールが宣言する全権限
pub const ALL_PERMISSIONS: &[&str] = &[
    VIEW_CONSENT_RECORD,
    MANAGE_CONSENT,
    VIEW_DATA_REQUEST,
    ADD_DATA_REQUEST,
    PROCESS_DATA_REQUEST,
    MANAGE_SETTINGS,
];

/// 管理者ロール名。全権限を持つ
pub const ADMIN_ROLE: &str = "admin";

/// 権限チェックの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionResult {
    Allowed,
    Denied { reason: String },
}

impl PermissionResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PermissionResult::Allowed)
    }

    pub fn denied(permission: &str) -> Self {
        PermissionResult::Denied {
            reason: format!("Missing permission: {}", permission),
        }
    }
}

/// ロールと付与済み権限から判定する
pub fn check_permission(role: &str, granted: &[String], required: &str) -> PermissionResult {
    if role == ADMIN_ROLE || granted.iter().any(|p| p == required) {
        PermissionResult::Allowed
    } else {
        PermissionResult::denied(required)
    }
}
