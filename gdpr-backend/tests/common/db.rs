// tests/common/db.rs

//! インメモリ SQLite のテストデータベース

use gdpr_backend::config::AppConfig;
use gdpr_backend::db::create_db_pool;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        // for_testing は sqlite::memory: を単一接続で使う
        let config = AppConfig::for_testing();
        let connection = create_db_pool(&config).await.unwrap();

        Migrator::up(&connection, None).await.unwrap();

        Self { connection }
    }
}
