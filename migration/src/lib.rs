// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// GDPRモジュールのテーブル
mod m20250801_000001_create_consent_records_table;
mod m20250801_000002_create_data_requests_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_consent_records_table::Migration),
            Box::new(m20250801_000002_create_data_requests_table::Migration),
        ]
    }
}
