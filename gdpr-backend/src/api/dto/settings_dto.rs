// gdpr-backend/src/api/dto/settings_dto.rs

use crate::domain::module_manifest::ModuleManifest;
use crate::shared::types::{DEFAULT_PER_PAGE, PER_PAGE_CHOICES};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct SettingsDto {
    pub module: ModuleManifest,
    pub per_page_choices: Vec<u64>,
    pub default_per_page: u64,
}

impl SettingsDto {
    pub fn current() -> Self {
        Self {
            module: ModuleManifest::gdpr(),
            per_page_choices: PER_PAGE_CHOICES.to_vec(),
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}
