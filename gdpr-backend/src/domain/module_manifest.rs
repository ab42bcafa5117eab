// gdpr-backend/src/domain/module_manifest.rs

use crate::domain::permission::ALL_PERMISSIONS;
use serde::Serialize;

pub const MODULE_ID: &str = "gdpr";

/// ハブのナビゲーション項目
#[derive(Debug, Clone, Serialize)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub order: u32,
}

/// ハブに登録されるモジュール定義
#[derive(Debug, Clone, Serialize)]
pub struct ModuleManifest {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub menu: MenuEntry,
    pub navigation: Vec<NavigationItem>,
    pub dependencies: Vec<&'static str>,
    pub permissions: Vec<&'static str>,
}

impl ModuleManifest {
    pub fn gdpr() -> Self {
        Self {
            id: MODULE_ID,
            name: "GDPR & Privacy",
            version: "1.0.0",
            icon: "lock-closed-outline",
            description: "GDPR consent management, data subject requests and privacy compliance",
            author: "ERPlora",
            category: "compliance",
            menu: MenuEntry {
                label: "GDPR & Privacy",
                icon: "lock-closed-outline",
                order: 82,
            },
            navigation: vec![
                NavigationItem {
                    id: "dashboard",
                    label: "Dashboard",
                    icon: "speedometer-outline",
                },
                NavigationItem {
                    id: "consents",
                    label: "Consents",
                    icon: "lock-closed-outline",
                },
                NavigationItem {
                    id: "requests",
                    label: "Requests",
                    icon: "person-outline",
                },
                NavigationItem {
                    id: "settings",
                    label: "Settings",
                    icon: "settings-outline",
                },
            ],
            dependencies: Vec::new(),
            permissions: ALL_PERMISSIONS.to_vec(),
        }
    }
}
